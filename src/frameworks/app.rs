use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::domain::entities::SessionIdentity;
use crate::domain::errors::DashboardError;
use crate::frameworks::config::Config;
use crate::interface_adapters::clients::BotClient;
use crate::interface_adapters::terminal::{TerminalOperator, TerminalPage};
use crate::use_cases::custom_commands::{
    DeleteCommandUseCase, ListCommandsUseCase, UpsertCommandUseCase,
};
use crate::use_cases::guild_details::GuildDetailsUseCase;
use crate::use_cases::list_guilds::ListGuildsUseCase;
use crate::use_cases::lookup_user::LookupUserUseCase;
use crate::use_cases::ping::PingUseCase;
use crate::use_cases::stats::StatsUseCase;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Local development reads settings from .env when present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::load();
    tracing::info!(
        base_url = %config.base_url,
        timeout_ms = config.request_timeout.as_millis() as u64,
        "configured"
    );

    let client = match BotClient::new(config.base_url.clone(), config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to build http client");
            return;
        }
    };

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            tracing::error!(error = %e, "failed to open terminal input");
            return;
        }
    };

    let mut app = App {
        client,
        page: TerminalPage::new(),
        operator: TerminalOperator::new(),
        session: SessionIdentity {
            user_id: config.user_id,
        },
    };

    println!("{}", "bot dashboard".magenta().bold());
    println!("{}", format!("endpoint: {}", config.base_url).bright_black());
    println!("{}", "type 'help' for commands, 'quit' to leave".bright_black());

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    break;
                }
                let _ = editor.add_history_entry(line);
                app.dispatch(line).await;
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "interrupted; type 'quit' to leave".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                tracing::error!(error = %e, "terminal input error");
                break;
            }
        }
    }
}

// Wired adapters plus the session identity the controller owns for the
// lifetime of the process.
struct App {
    client: BotClient,
    page: TerminalPage,
    operator: TerminalOperator,
    session: SessionIdentity,
}

impl App {
    async fn dispatch(&mut self, line: &str) {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else { return };
        match command {
            "ping" => self.ping().await,
            // An absent argument mirrors an empty input field: the lookup
            // is sent as-is.
            "user" => {
                let user_id = parts.next().unwrap_or("");
                self.lookup_user(user_id).await;
            }
            "guilds" => self.list_guilds().await,
            "guild" => match parts.next() {
                Some(guild_id) => self.guild_details(guild_id).await,
                None => usage("guild <guild-id>"),
            },
            "stats" => self.stats().await,
            "commands" => match parts.next() {
                Some(guild_id) => self.list_commands(guild_id).await,
                None => usage("commands <guild-id>"),
            },
            "setcommand" => {
                let guild_id = parts.next();
                let name = parts.next();
                let response = parts.collect::<Vec<_>>().join(" ");
                match (guild_id, name) {
                    (Some(guild_id), Some(name)) => {
                        self.upsert_command(guild_id, name, &response).await;
                    }
                    _ => usage("setcommand <guild-id> <name> <response...>"),
                }
            }
            "delcommand" => match (parts.next(), parts.next()) {
                (Some(guild_id), Some(name)) => self.delete_command(guild_id, name).await,
                _ => usage("delcommand <guild-id> <name>"),
            },
            "help" => print_help(),
            _ => println!("{}", "unknown command; type 'help'".bright_black()),
        }
    }

    #[tracing::instrument(name = "ping", skip_all)]
    async fn ping(&self) {
        let use_case = PingUseCase {
            api: self.client.clone(),
            page: self.page.clone(),
        };
        report(use_case.execute().await);
    }

    #[tracing::instrument(name = "user", skip_all)]
    async fn lookup_user(&self, user_id: &str) {
        let use_case = LookupUserUseCase {
            api: self.client.clone(),
            page: self.page.clone(),
        };
        report(use_case.execute(user_id).await);
    }

    #[tracing::instrument(name = "guilds", skip_all)]
    async fn list_guilds(&mut self) {
        let use_case = ListGuildsUseCase {
            api: self.client.clone(),
            operator: self.operator.clone(),
            page: self.page.clone(),
        };
        report(use_case.execute(&mut self.session).await);
    }

    #[tracing::instrument(name = "guild", skip_all)]
    async fn guild_details(&mut self, guild_id: &str) {
        let use_case = GuildDetailsUseCase {
            api: self.client.clone(),
            operator: self.operator.clone(),
            page: self.page.clone(),
        };
        report(use_case.execute(&mut self.session, guild_id).await);
    }

    #[tracing::instrument(name = "stats", skip_all)]
    async fn stats(&mut self) {
        let use_case = StatsUseCase {
            api: self.client.clone(),
            operator: self.operator.clone(),
            page: self.page.clone(),
        };
        report(use_case.execute(&mut self.session).await);
    }

    #[tracing::instrument(name = "commands", skip_all)]
    async fn list_commands(&mut self, guild_id: &str) {
        let use_case = ListCommandsUseCase {
            api: self.client.clone(),
            operator: self.operator.clone(),
            page: self.page.clone(),
        };
        report(use_case.execute(&mut self.session, guild_id).await);
    }

    #[tracing::instrument(name = "setcommand", skip_all)]
    async fn upsert_command(&mut self, guild_id: &str, name: &str, response: &str) {
        let use_case = UpsertCommandUseCase {
            api: self.client.clone(),
            operator: self.operator.clone(),
            page: self.page.clone(),
        };
        report(
            use_case
                .execute(&mut self.session, guild_id, name, response)
                .await,
        );
    }

    #[tracing::instrument(name = "delcommand", skip_all)]
    async fn delete_command(&mut self, guild_id: &str, name: &str) {
        let use_case = DeleteCommandUseCase {
            api: self.client.clone(),
            operator: self.operator.clone(),
            page: self.page.clone(),
        };
        report(use_case.execute(&mut self.session, guild_id, name).await);
    }
}

// Failures that no page target rendered end up in the log.
fn report<E: Into<DashboardError>>(result: Result<(), E>) {
    if let Err(err) = result {
        match err.into() {
            DashboardError::IdentityDeclined => {
                tracing::debug!("aborted: no user id supplied");
            }
            DashboardError::Api(err) => {
                tracing::error!(error = %err, "request failed");
            }
        }
    }
}

fn usage(text: &str) {
    println!("{}", format!("usage: {text}").yellow());
}

fn print_help() {
    println!("{}", "commands".cyan().bold());
    println!("  ping                                        check the bot is up");
    println!("  user <id>                                   look up a user record");
    println!("  guilds                                      list guilds the bot shares with you");
    println!("  guild <guild-id>                            show one guild's counters");
    println!("  stats                                       show bot-wide stats");
    println!("  commands <guild-id>                         list a guild's custom commands");
    println!("  setcommand <guild-id> <name> <response...>  create or replace a custom command");
    println!("  delcommand <guild-id> <name>                delete a custom command");
    println!("  help                                        this list");
    println!("  quit                                        leave");
}
