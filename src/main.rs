use clap::{Parser, Subcommand};
use log::debug;
use std::process::ExitCode;

use mealdb_browser::{filter_meals, Browser, BrowserConfig, MealDbClient};

/// Browse TheMealDB from the terminal
#[derive(Parser, Debug)]
#[command(name = "mealdb-browser", version, about)]
struct Cli {
    /// Catalog root URL (overrides mealdb.toml and MEALDB__BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List food categories
    Categories {
        /// Only show categories whose name contains this text
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// List the meals of a category
    Meals {
        category: String,
        /// Only show meals whose name contains this text
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show a meal's region, ingredients and instructions
    Meal { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = BrowserConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    debug!("{:#?}", config);

    let mut browser = Browser::new(MealDbClient::from_config(&config)?);

    match cli.command {
        Command::Categories { query } => {
            browser.load_categories().await?;
            browser.set_query(query);
            let categories = browser.visible_categories();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else if categories.is_empty() {
                println!("No categories found.");
            } else {
                for category in &categories {
                    println!("{:>4}  {}", category.id, category.name);
                }
            }
        }
        Command::Meals { category, query } => {
            let meals = filter_meals(browser.open_category(&category).await?, &query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&meals)?);
            } else if meals.is_empty() {
                println!("No meals found.");
            } else {
                println!("{category} recipes");
                for meal in &meals {
                    println!("{:>6}  {}", meal.id, meal.name);
                }
            }
        }
        Command::Meal { id } => {
            browser.open_meal(&id).await?;
            let ingredients = browser.selected_ingredients();
            let Some(detail) = browser.selected() else {
                return Ok(());
            };

            if cli.json {
                let value = serde_json::json!({
                    "meal": detail,
                    "ingredients": ingredients,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", detail.name);
                println!("Region: {}", detail.region);
                println!();
                println!("Ingredients");
                for line in &ingredients {
                    println!("• {line}");
                }
                println!();
                println!("Instructions");
                println!("{}", detail.instructions);
            }
        }
    }

    Ok(())
}
