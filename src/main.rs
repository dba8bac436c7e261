use autorent::api::ApiClient;
use autorent::booking::{CheckoutScreen, SchedulingScreen, ValidationGap};
use autorent::core::config;
use autorent::core::day::DayEvent;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "autorent", about = "Car rental scheduling client")]
struct Args {
    /// Backend base URL (overrides config and AUTORENT_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the rentable fleet
    Cars,
    /// Book a car for a date range
    Book {
        /// Car id to book
        #[arg(long)]
        car: String,
        /// First rental day, YYYY-MM-DD
        #[arg(long)]
        from: NaiveDate,
        /// Last rental day, YYYY-MM-DD
        #[arg(long)]
        until: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to autorent.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("autorent.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let settings = config::resolve(&config::load_config()?, args.api_url.as_deref());
    log::info!("Autorent starting up against {}", settings.api_base_url);

    let client = ApiClient::new(Some(settings.api_base_url.clone()));

    match args.command {
        Command::Cars => {
            let cars = client.list_cars().await?;
            println!("Total of {} cars", cars.len());
            for car in cars {
                println!(
                    "{:>4}  {} {} — {} {}{}",
                    car.id, car.brand, car.name, car.rent.period, settings.currency, car.rent.price
                );
            }
        }
        Command::Book { car, from, until } => {
            let fleet = client.list_cars().await?;
            let car = fleet
                .into_iter()
                .find(|c| c.id == car)
                .ok_or_else(|| format!("no car with id {car}"))?;

            // Drive the scheduling screen the way the calendar would.
            let mut scheduling = SchedulingScreen::new(car);
            scheduling.press_day(DayEvent::from_date(from))?;
            scheduling.press_day(DayEvent::from_date(until))?;

            let handoff = match scheduling.confirm_rental() {
                Ok(handoff) => handoff,
                Err(ValidationGap) => {
                    eprintln!("{}", ValidationGap::MESSAGE);
                    return Ok(());
                }
            };

            let mut checkout = CheckoutScreen::new(handoff, settings.user_id);
            let period = checkout.rental_period()?;
            println!(
                "{} {} — {} to {}, {} days, total {}{}",
                checkout.handoff.car.brand,
                checkout.handoff.car.name,
                period.start_formatted,
                period.end_formatted,
                checkout.handoff.dates.len(),
                settings.currency,
                checkout.rent_total()
            );

            checkout.confirm(&client).await?;
            println!("Booking confirmed.");
        }
    }

    Ok(())
}
