use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    notes_assistant::cli::main()
}
