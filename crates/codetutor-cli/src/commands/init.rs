use anyhow::Result;
use codetutor_infrastructure::CodeTutorPaths;

pub fn run() -> Result<()> {
    let path = CodeTutorPaths::default().ensure_secret_file()?;
    println!("Secret file: {}", path.display());
    println!("Fill in base44.app_id and base44.api_key before running session commands.");
    Ok(())
}
