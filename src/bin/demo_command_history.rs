// Walkthrough of the command history on an integer and on a text buffer
// Run with: RUST_LOG=debug cargo run --bin demo_command_history

use undo_redo::{
    AddCommand, AppendTextCommand, CommandManager, HistoryConfig, HistoryEvent, MultiplyCommand,
};

fn narrate(event: &HistoryEvent) {
    println!("  {}", event);
}

fn integer_demo(config: &HistoryConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Command Pattern (Undo/Redo) ===");

    let mut value: i64 = 10;
    let mut manager: CommandManager<i64> =
        CommandManager::with_config(config).with_listener(narrate);

    println!("Initial value: {}\n", value);

    println!("Executing commands:");
    manager.execute(Box::new(AddCommand::new(5)), &mut value)?;
    manager.execute(Box::new(MultiplyCommand::new(2)), &mut value)?;
    manager.execute(Box::new(AddCommand::new(10)), &mut value)?;
    println!("Current value: {}\n", value);

    println!("Undoing operations:");
    manager.undo(&mut value)?;
    manager.undo(&mut value)?;
    println!("Current value: {}\n", value);

    println!("Redoing operations:");
    manager.redo(&mut value)?;
    println!("Current value: {}\n", value);

    println!("New command after undo:");
    manager.execute(Box::new(AddCommand::new(1)), &mut value)?;
    manager.redo(&mut value)?;
    println!("Final value: {}\n", value);

    println!("History:\n{}\n", manager.snapshot().to_json()?);
    Ok(())
}

fn text_demo(config: &HistoryConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Undo/Redo Text Editor ===");

    let mut text = String::new();
    let mut manager: CommandManager<String> =
        CommandManager::with_config(config).with_listener(narrate);

    println!("Initial: \"{}\"", text);
    for chunk in ["Hello", " World", "!"] {
        manager.execute(Box::new(AppendTextCommand::new(chunk)), &mut text)?;
        println!("After typing '{}': \"{}\"", chunk, text);
    }

    manager.undo(&mut text)?;
    println!("After undo: \"{}\"", text);
    manager.undo(&mut text)?;
    println!("After undo: \"{}\"", text);
    manager.redo(&mut text)?;
    println!("After redo: \"{}\"", text);

    manager.execute(Box::new(AppendTextCommand::new(" C++")), &mut text)?;
    println!("After typing ' C++': \"{}\"", text);

    // Redo history was discarded by the last command
    manager.redo(&mut text)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match HistoryConfig::default_path() {
        Some(path) => HistoryConfig::load_or_default(&path)?,
        None => HistoryConfig::default(),
    };
    log::debug!("Using history config: {:?}", config);

    integer_demo(&config)?;
    text_demo(&config)?;

    Ok(())
}
