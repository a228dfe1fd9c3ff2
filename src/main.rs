use std::env;
use std::path::PathBuf;
use std::process;

use log::info;
use xmldoc_reader::docs::{DocCommentReader, DocsSettings};
use xmldoc_reader::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        // Use eprintln for usage info since logger isn't initialized yet
        eprintln!("Usage: {} <assembly_name> <identifier> [search_dir ...]", args[0]);
        eprintln!("  <assembly_name>: Assembly whose <assembly_name>.xml doc file to resolve");
        eprintln!("  <identifier>: Canonical member identifier, e.g. M:N.C.Foo(System.Int32)");
        eprintln!("  [search_dir ...]: Directories probed in order (defaults to the current directory)");
        eprintln!("Example: {} Demo.Core \"T:Demo.Core.Widget\" ./docs ./build", args[0]);
        process::exit(1);
    }

    if let Err(e) = logging::init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    let assembly_name = &args[1];
    let identifier = &args[2];
    let settings = if args.len() > 3 {
        DocsSettings::new(args[3..].iter().map(PathBuf::from).collect())
    } else {
        DocsSettings::default()
    };

    info!("Resolving doc comments for assembly '{}'", assembly_name);

    let reader = match DocCommentReader::from_assembly(assembly_name, &settings).await {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    info!(
        "Using doc comment file {} ({} entries)",
        reader.full_path().display(),
        reader.store().len()
    );

    match reader.comments_for_identifier(identifier) {
        Some(fragment) => println!("{}", fragment),
        None => {
            eprintln!("No doc comment found for '{}'", identifier);
            process::exit(1);
        }
    }
}
