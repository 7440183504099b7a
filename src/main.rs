mod appsettings;
mod reminders;

use chrono::Utc;
use sprout_api::{ApiReminderStore, ReminderStore, Session, SproutClient};
use sprout_models::reminder::ReminderStatus;
use sprout_schedule::OccurrenceFormatter;

use reminders::{display_reminder, mark_reminder};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Show(String),
    Mark(String, ReminderStatus),
    Delete(String),
}

impl Command {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            [] | ["list"] => Ok(Command::List),
            ["show", id] => Ok(Command::Show(id.to_string())),
            ["done", id] => Ok(Command::Mark(id.to_string(), ReminderStatus::Done)),
            ["skip", id] => Ok(Command::Mark(id.to_string(), ReminderStatus::Skipped)),
            ["delete", id] => Ok(Command::Delete(id.to_string())),
            other => anyhow::bail!(
                "Unknown command {:?}. Usage: sprout [list | show <id> | done <id> | skip <id> | delete <id>]",
                other.join(" ")
            ),
        }
    }
}

async fn run(
    command: Command,
    store: &dyn ReminderStore,
    formatter: &OccurrenceFormatter,
) -> anyhow::Result<()> {
    let now = Utc::now().with_timezone(&formatter.timezone());

    match command {
        Command::List => {
            let reminders = store.get_all().await?;
            if reminders.is_empty() {
                println!("No reminders yet.");
            }
            for reminder in &reminders {
                println!("{}", display_reminder(reminder, formatter, &now));
            }
        }
        Command::Show(id) => {
            let Some(reminder) = store.get(&id).await? else {
                anyhow::bail!("No such reminder {id}");
            };

            println!("{}", display_reminder(&reminder, formatter, &now));
            if let Some(description) = &reminder.description {
                println!("{description}");
            }
            if let Some(time) = formatter.edit_time_value(&reminder.schedule) {
                println!("Time: {}", time.format("%H:%M"));
            }
            if let Err(errors) = reminder.schedule.validate() {
                log::warn!("Reminder {id} has an invalid schedule: {errors}");
                for error in errors.errors() {
                    println!("  ! {error}");
                }
            }
        }
        Command::Mark(id, status) => {
            let reminder = mark_reminder(store, &id, status).await?;
            println!("{}", display_reminder(&reminder, formatter, &now));
        }
        Command::Delete(id) => {
            store.delete(&id).await?;
            println!("Deleted reminder {id}.");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = appsettings::load()?;
    let session = settings
        .api
        .token
        .clone()
        .map(Session::with_token)
        .unwrap_or_default();
    if !session.is_authenticated() {
        log::warn!("No API token configured, requests will be anonymous");
    }

    log::info!("Using backend at {}", settings.api.base_url);
    let client = SproutClient::new(settings.api.base_url.clone(), session);
    let store = ApiReminderStore::new(client.reminders.clone());
    let formatter = OccurrenceFormatter::new(settings.display.timezone);

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(Command::parse(&args)?, &store, &formatter).await
}
