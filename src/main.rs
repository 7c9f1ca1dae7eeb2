//! Contact Cards - terminal front end
//!
//! Renders the contact list from the cards API and walks the user through the
//! contact creation form on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_cards::client::{AsyncCardsClient, AsyncCardsClientImpl};
use contact_cards::validation::FormField;
use contact_cards::views::{ContactsPage, SubmitOutcome};
use contact_cards::{CardsClient, Config};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const HELP: &str = "Commands: add, edit <id>, list, refresh, help, quit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL; stdout is reserved for the rendered page
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using cards API at {}", config.api_base_url);

    let client = Arc::new(AsyncCardsClientImpl::new(CardsClient::new(&config)));
    let api = client.clone() as Arc<dyn AsyncCardsClient>;

    let mut page = ContactsPage::new().with_refresh_after_create(config.refresh_after_create);
    page.mount(api.as_ref()).await;
    println!("{}\n\n{}", page.render(), HELP);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while let Some(line) = prompt(&mut input, ">")? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("add"), _) => {
                page.open_form();
                run_form(&mut page, api.as_ref(), &mut input).await?;
                println!("{}", page.render());
            }
            (Some("edit"), Some(id)) => match id.parse::<i64>() {
                Ok(id) => {
                    page.list_mut().edit(id);
                    println!("Editing is not available yet.");
                }
                Err(_) => println!("Not a card id: {}", id),
            },
            (Some("list"), _) => println!("{}", page.render()),
            (Some("refresh"), _) => {
                page.mount(api.as_ref()).await;
                println!("{}", page.render());
            }
            (Some("quit"), _) | (Some("exit"), _) => break,
            (None, _) => {}
            _ => println!("{}", HELP),
        }
    }

    let summary = client.inner().metrics().summary();
    info!(
        requests = summary.http_requests_total,
        errors = summary.http_errors_total,
        avg_ms = summary.http_duration_avg_ms,
        fetched = summary.cards_fetched_total,
        created = summary.cards_created_total,
        "Session finished"
    );
    Ok(())
}

/// Drive the open form until it closes or stdin ends.
///
/// Fields are entered in order, then `save` submits and `cancel` discards.
/// After a blocked or failed save only the failing fields are asked again.
async fn run_form(
    page: &mut ContactsPage,
    api: &dyn AsyncCardsClient,
    input: &mut impl BufRead,
) -> Result<()> {
    let mut pending: Vec<FormField> = FormField::ALL.to_vec();

    loop {
        for field in pending.drain(..) {
            let Some(form) = page.form_mut() else {
                return Ok(());
            };
            let label = format!("{} [{}]:", field.label(), field.placeholder());
            let Some(value) = prompt(input, &label)? else {
                page.cancel_form();
                return Ok(());
            };
            form.change(field, value);
            form.blur(field);
            if let Some(message) = form.visible_error(field) {
                println!("  ! {}", message);
            }
        }

        let Some(command) = prompt(input, "save / cancel:")? else {
            page.cancel_form();
            return Ok(());
        };

        match command.trim() {
            "save" => match page.submit_form(api).await {
                Some(SubmitOutcome::Created(_)) | None => return Ok(()),
                Some(SubmitOutcome::Invalid) => {
                    if let Some(form) = page.form() {
                        println!("{}", form.render());
                        pending = FormField::ALL
                            .into_iter()
                            .filter(|f| form.error(*f).is_some())
                            .collect();
                    }
                }
                Some(SubmitOutcome::Failed(err)) => {
                    error!("{}", err);
                    if let Some(form) = page.form() {
                        println!("{}", form.render());
                    }
                }
                Some(SubmitOutcome::InFlight) => {}
            },
            "cancel" => {
                page.cancel_form();
                return Ok(());
            }
            _ => println!("Type save or cancel."),
        }
    }
}

/// Print a prompt and read one line without its line ending. `None` on end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{} ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
