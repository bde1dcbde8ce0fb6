mod fields;
mod io;
mod store;
mod types;

use std::error::Error;
use std::io::Write;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let dataset_path = args
        .next()
        .ok_or("usage: cafe_lookup <dataset_file> <output_file>")?;
    let output_path = args
        .next()
        .ok_or("usage: cafe_lookup <dataset_file> <output_file>")?;

    let mut cafes = store::CafeList::default();
    for result in io::DatasetReader::from_path(&dataset_path)? {
        match result {
            Ok(cafe) => cafes.append(cafe),
            Err(err) if err.is_recoverable() => eprintln!("Warning: skipping {}", err),
            Err(err) => return Err(err.into()),
        }
    }

    // Queries may come from a redirected file or be typed interactively,
    // one per line, ended by EOF.
    let queries = io::read_queries(std::io::stdin().lock())?;

    let output = std::fs::File::create(&output_path)
        .map_err(|err| format!("cannot open output file {}: {}", output_path, err))?;
    let mut output = std::io::BufWriter::new(output);

    cafes.search(&queries, &mut output, &mut std::io::stdout())?;
    output.flush()?;

    Ok(())
}
