use std::io::Read;

use tracing::info;

use crate::cli::commands::ReplayArgs;
use crate::cli::output::*;
use crate::cli::script::parse_script;
use crate::ops::controller::Controller;

/// Run a script against a fresh list: list on stdout, notifications on stderr
pub fn cmd_replay(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let actions = parse_script(&text)?;
    info!(actions = actions.len(), "replaying script");

    let mut controller = Controller::new();
    let mut notifications = Vec::new();
    for action in actions {
        controller.apply(action);
        notifications.extend(controller.take_notifications());
    }

    let tasks = controller.render();
    if args.json {
        let out = ReplayJson {
            tasks: tasks.iter().map(|t| task_to_json(t)).collect(),
            notifications,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for notification in &notifications {
            eprintln!("{}", format_notification(notification));
        }
        if tasks.is_empty() {
            println!("You have no tasks");
        }
        for task in tasks {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}
