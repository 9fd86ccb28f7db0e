use crate::api::client::GeminiClient;
use crate::cli::main_types::Commands;
use crate::core::classify::ErrorCategory;
use crate::core::services::advice_service::AdviceService;
use crate::core::services::traits::AdviceGenerator;
use crate::core::session::ConsultSession;
use crate::display::advice::render_advice;
use crate::error::{AdviceError, AppError, CliError};
use crate::storage::config::Config;
use crate::storage::credentials::{ApiCredential, CREDENTIAL_SOURCES};
use std::io::{self, BufRead, Write};

pub struct Dispatcher {
    config: Config,
    credential: Option<ApiCredential>,
    verbose: bool,
}

impl Dispatcher {
    // Static helper function for verbose logging (used before self exists)
    fn print_verbose(verbose: bool, msg: &str) {
        if verbose {
            println!("Verbose: {}", msg);
        }
    }

    // Instance method for verbose logging
    fn log_verbose(&self, msg: &str) {
        Self::print_verbose(self.verbose, msg);
    }

    pub fn new(config: Config, credential: Option<ApiCredential>, verbose: bool) -> Self {
        match &credential {
            Some(c) => Self::print_verbose(
                verbose,
                &format!("Credential resolved from {}", c.source()),
            ),
            None => Self::print_verbose(verbose, "No credential found in any source"),
        }

        Self {
            config,
            credential,
            verbose,
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Consult { query } => self.handle_consult(query).await,
            Commands::Status => self.handle_status(),
        }
    }

    async fn handle_consult(&self, words: Vec<String>) -> Result<(), AppError> {
        let client = GeminiClient::new(
            self.config.endpoint.clone(),
            self.config.model.clone(),
            self.config.temperature,
        )?;
        let service = AdviceService::new(self.credential.clone(), client);

        // Readiness is checked before any request is attempted; an
        // unconfigured process refuses to dispatch at all.
        if !service.is_configured() {
            eprintln!("{}", ErrorCategory::Configuration.user_message());
            return Err(AdviceError::MissingCredential.into());
        }

        let mut session = ConsultSession::new(service);
        let query = words.join(" ");

        if !query.trim().is_empty() {
            self.consult_once(&mut session, &query).await
        } else if atty::is(atty::Stream::Stdin) {
            self.consult_interactive(&mut session).await
        } else {
            Err(CliError::InvalidArguments(
                "query must not be empty (pass it as arguments or run on a terminal)".to_string(),
            )
            .into())
        }
    }

    async fn consult_once<G: AdviceGenerator>(
        &self,
        session: &mut ConsultSession<G>,
        query: &str,
    ) -> Result<(), AppError> {
        self.log_verbose(&format!("Consulting the strategist: {}", query));

        match session.consult(query).await {
            Ok(advice) => {
                println!("{}", render_advice(&advice));
                Ok(())
            }
            Err(err) => {
                eprintln!("{}", err.user_message());
                Err(err)
            }
        }
    }

    async fn consult_interactive<G: AdviceGenerator>(
        &self,
        session: &mut ConsultSession<G>,
    ) -> Result<(), AppError> {
        println!("Describe your situation (blank line or 'quit' to leave):");

        loop {
            print!("> ");
            io::stdout()
                .flush()
                .map_err(|e| CliError::InputError(e.to_string()))?;

            let mut line = String::new();
            let bytes = io::stdin()
                .lock()
                .read_line(&mut line)
                .map_err(|e| CliError::InputError(e.to_string()))?;
            if bytes == 0 {
                break;
            }

            let query = line.trim();
            if query.is_empty() || query == "quit" {
                break;
            }

            if let Err(err) = self.consult_once(session, query).await {
                // The latch is permanent: stop the loop, further
                // submissions would be rejected anyway.
                if session.is_locked() {
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    fn handle_status(&self) -> Result<(), AppError> {
        self.log_verbose("Attempting status command");

        println!("Strategist Status:");
        println!("==================");

        match &self.credential {
            Some(credential) => {
                println!(
                    "Credential: {} (from {})",
                    credential.masked(),
                    credential.source()
                );
            }
            None => {
                println!("Credential: not configured");
                println!("Set one of: {}", CREDENTIAL_SOURCES.join(", "));
            }
        }

        println!("Model: {}", self.config.model);
        println!("Endpoint: {}", self.config.endpoint);
        println!("Temperature: {}", self.config.temperature);

        Ok(())
    }
}
