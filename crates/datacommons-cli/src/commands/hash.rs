//! Hash command - print a file's SHA-256 digest.

use std::path::PathBuf;

pub fn run(file: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let digest = datacommons::compute_sha256(&file)?;
    if verbose {
        println!("{}  {}", digest, file.display());
    } else {
        println!("{}", digest);
    }
    Ok(())
}
