//! Wayfarer CLI entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wayfarer::agent::{AgentLoop, Context, LlmClient, ProviderRegistry};
use wayfarer::amadeus::{AirportSearch, AmadeusClient, FlightSearch, HotelOfferSearch};
use wayfarer::config::Config;
use wayfarer::{format, lookup, ui};

#[derive(Parser)]
#[command(name = "wayfarer")]
#[command(about = "✈ Wayfarer - flight and hotel search over the Amadeus API")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.wayfarer/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Listen port (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask the travel agent in natural language; interactive without a query
    Ask {
        query: Option<String>,
    },

    /// Search airports by keyword
    Airports {
        keyword: String,
    },

    /// Search flight offers
    Flights {
        origin: String,
        destination: String,
        /// Departure date (YYYY-MM-DD)
        date: String,

        #[arg(long, default_value_t = 1)]
        adults: u32,

        #[arg(long, default_value_t = 3)]
        max: u32,
    },

    /// Search hotel offers in a city
    Hotels {
        city: String,
        /// Check-in date (YYYY-MM-DD)
        check_in: String,

        /// Check-out date, defaults to the day after check-in
        #[arg(long)]
        check_out: Option<String>,

        #[arg(long, default_value_t = 1)]
        adults: u32,
    },

    /// Show configuration status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wayfarer=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = wayfarer::config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.server.port);
            ui::print_header(config.amadeus.environment.as_str(), &config.llm.model);
            ui::print_step(&format!("Starting HTTP API on port {}", port));
            let state = wayfarer::api::AppState::from_config(&config)?;
            if state.llm.is_some() {
                ui::print_success("Natural-language routes enabled");
            } else {
                ui::print_warning("OPENAI_API_KEY not set, /api/agent and /api/openai return 503");
            }
            wayfarer::api::serve(state, port).await?;
        }

        Commands::Ask { query: Some(query) } => {
            let response = Session::new(&config)?.ask(&query).await;
            println!("\n✈ {}", response);
        }

        Commands::Ask { query: None } => {
            let session = Session::new(&config)?;
            println!("✈ Interactive mode (type 'exit' to quit)\n");
            run_agent_interactive(&session).await?;
        }

        Commands::Airports { keyword } => {
            let client = AmadeusClient::new(&config.amadeus)?;
            let result = client.search_airports(&AirportSearch::new(keyword.clone())).await;
            println!("{}", format::locations(&keyword, &result));
        }

        Commands::Flights { origin, destination, date, adults, max } => {
            let client = AmadeusClient::new(&config.amadeus)?;
            let mut request = FlightSearch::new(origin.to_uppercase(), destination.to_uppercase(), date);
            request.adults = adults;
            request.max_results = max;
            ui::print_thinking("Searching flights");
            let result = client.search_flights(&request).await;
            println!("{}", format::flight_offers(&request.origin, &request.destination, &result));
        }

        Commands::Hotels { city, check_in, check_out, adults } => {
            let hotel_ids = lookup::resolve(&city).hotel_ids();
            if hotel_ids.is_empty() {
                ui::print_warning(&format!(
                    "No hotel information found for city '{}'. Supported: {}",
                    city,
                    lookup::cities_with_hotels().join(", ")
                ));
                return Ok(());
            }

            let client = AmadeusClient::new(&config.amadeus)?;
            let mut request = HotelOfferSearch::new(hotel_ids, check_in.clone());
            request.check_out_date = check_out;
            request.adults = adults;
            let check_out = request.effective_check_out()?;

            ui::print_thinking("Searching hotel offers");
            let result = client.search_hotel_offers(&request).await;
            println!("{}", format::hotel_offers(&city, &check_in, &check_out, &result));
        }

        Commands::Status => {
            let path = cli.config.unwrap_or_else(wayfarer::config::config_path);
            print_status(&config, &path);
        }
    }

    Ok(())
}

fn print_status(config: &Config, path: &std::path::Path) {
    println!("✈ Wayfarer Status\n");
    println!("Config file: {:?}", path);
    println!("Amadeus environment: {}", config.amadeus.environment.as_str());
    if let Some(ref base) = config.amadeus.base_url {
        println!("Amadeus base URL: {}", base);
    }
    println!("Amadeus client id: {}", ui::mask(&config.amadeus.client_id));
    println!(
        "Amadeus client secret: {}",
        if config.amadeus.client_secret.is_empty() { "not set" } else { "✓" }
    );
    println!("LLM model: {}", config.llm.model);
    println!(
        "OpenAI API key: {}",
        if config.llm.api_key.is_empty() { "not set" } else { "✓" }
    );
    println!("Server port: {}", config.server.port);
}

/// Agent plus the provider client it searches with; built once per process
/// so the access token is reused across queries.
struct Session {
    agent: AgentLoop<Arc<dyn LlmClient>>,
    ctx: Context,
}

impl Session {
    fn new(config: &Config) -> Result<Self> {
        let llm = ProviderRegistry::create(&config.llm)?;
        let client = Arc::new(AmadeusClient::new(&config.amadeus)?);
        Ok(Self {
            agent: AgentLoop::new(llm, config.llm.max_iterations),
            ctx: Context::new(client),
        })
    }

    async fn ask(&self, query: &str) -> String {
        self.agent.process_query(query, &self.ctx).await
    }
}

async fn run_agent_interactive(session: &Session) -> Result<()> {
    use std::io::{self, Write};

    loop {
        // Blue "You"
        print!("\x1b[1;34mYou\x1b[0m: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("👋 Bye!");
            break;
        }

        if input.is_empty() {
            continue;
        }

        // Green "Agent"
        let response = session.ask(input).await;
        println!("\n\x1b[1;32mAgent\x1b[0m: {}\n", response);
    }

    Ok(())
}
