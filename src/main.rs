// Sortty: Step-by-Step Sorting Visualizer

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::array::RandomArray;
use sortty::config::Cli;
use sortty::logging;
use sortty::playback::{Controller, IntervalScheduler, SystemClock};
use sortty::registry::Registry;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let registry = Registry::new();

    if cli.list {
        for algorithm in registry.iter() {
            let d = &algorithm.descriptor;
            println!(
                "{:<16} {:<16} time {:<12} space {}",
                d.id, d.title, d.complexity.time, d.complexity.space
            );
        }
        return Ok(());
    }

    let config = match cli.into_config(&registry) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --help for usage.");
            std::process::exit(1);
        }
    };

    logging::init(config.log_file.as_deref())?;
    tracing::info!(?config, "starting");

    let source = match config.seed {
        Some(seed) => RandomArray::seeded(config.size, config.max_value, seed),
        None => RandomArray::new(config.size, config.max_value),
    };

    let mut controller = Controller::new(
        registry,
        source,
        IntervalScheduler::new(SystemClock::new()),
    );
    controller.set_speed(config.speed)?;
    if let Some(id) = &config.algorithm {
        controller.select_algorithm(id);
    }
    if config.autoplay {
        controller.start_auto_sorting();
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
