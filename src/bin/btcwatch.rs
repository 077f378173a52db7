use btcwatch::config::Config;
use btcwatch::data_store::ObservationStore;
use btcwatch::scrapers::base::MarketScraper;
use btcwatch::scrapers::coinmarketcap::CoinMarketCapScraper;
use btcwatch::services::data_service::DataService;

use clap::{App, Arg, SubCommand};
use log::{error, info};
use std::error::Error;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // 创建基本的命令行应用
    let app = App::new("BtcWatch")
        .version("1.0.0")
        .author("BtcWatch Team")
        .about("Bitcoin market data collection system");

    // 添加子命令
    let app = app
        .subcommand(
            SubCommand::with_name("scrape")
                .about("Scrape one Bitcoin market snapshot and append it to the store")
                .arg(
                    Arg::with_name("webdriver")
                        .short('w')
                        .long("webdriver")
                        .value_name("URL")
                        .help("WebDriver endpoint to connect to")
                        .takes_value(true)
                        .default_value("http://localhost:9515"),
                )
                .arg(
                    Arg::with_name("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("CSV file to append records to (defaults to the executable's directory)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("no-headless")
                        .long("no-headless")
                        .help("Run the browser with a visible window")
                        .takes_value(false),
                )
                .arg(
                    Arg::with_name("scroll-limit")
                        .long("scroll-limit")
                        .value_name("PX")
                        .help("Maximum scroll depth when looking for sentiment indicators")
                        .takes_value(true)
                        .default_value("4000"),
                ),
        )
        .subcommand(
            SubCommand::with_name("explore")
                .about("Explore recorded market snapshots")
                .arg(
                    Arg::with_name("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("CSV file to read records from")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("limit")
                        .short('l')
                        .long("limit")
                        .value_name("LIMIT")
                        .help("Limit the number of records to display")
                        .takes_value(true)
                        .default_value("10"),
                ),
        );

    let matches = app.get_matches();

    if let Some(matches) = matches.subcommand_matches("explore") {
        let limit = matches
            .value_of("limit")
            .unwrap_or("10")
            .parse::<usize>()
            .unwrap_or(10);

        let store = match matches.value_of("output") {
            Some(path) => ObservationStore::new(path),
            None => ObservationStore::new(ObservationStore::default_path()),
        };

        // 读取数据
        let records = store.load()?;
        info!(
            "Found {} observations in {}",
            records.len(),
            store.path().display()
        );

        // 显示最近的记录
        info!("{:-<80}", "");
        info!(
            "{:<20} {:<14} {:<12} {:<12} {:<10} {:<8} {:<8}",
            "Timestamp", "Price", "Market Cap", "Volume 24h", "Change", "Bullish", "Bearish"
        );
        info!("{:-<80}", "");

        for record in records.iter().rev().take(limit) {
            info!(
                "{:<20} {:<14} {:<12} {:<12} {:<10} {:<8} {:<8}",
                record.timestamp,
                record.price,
                record.market_cap,
                record.volume_24h,
                record.price_change_24h,
                record.bullish_sentiment,
                record.bearish_sentiment
            );
        }

        if records.len() > limit {
            info!("... and {} more records", records.len() - limit);
        } else if records.is_empty() {
            info!("No observations recorded yet");
        }

        return Ok(());
    }

    // 未指定子命令时默认执行一次抓取
    let mut config = Config::new();
    if let Some(matches) = matches.subcommand_matches("scrape") {
        config = config
            .with_webdriver_url(matches.value_of("webdriver").unwrap_or("http://localhost:9515"));

        if let Some(output) = matches.value_of("output") {
            config = config.with_output_path(output);
        }

        if matches.is_present("no-headless") {
            config = config.with_headless(false);
        }

        // 获取滚动深度上限
        let scroll_limit = matches
            .value_of("scroll-limit")
            .unwrap_or("4000")
            .parse::<u32>()
            .unwrap_or(4000);
        config = config.with_scroll_limit_px(scroll_limit);
    }

    info!("Starting Bitcoin scraper...");

    // 创建抓取器，启动浏览器会话
    let scraper: Arc<dyn MarketScraper + Send + Sync> =
        Arc::new(CoinMarketCapScraper::new(&config).await?);

    // 创建数据服务
    let data_service = DataService::new(&config, scraper);

    // 抓取和存储失败都不中断进程，浏览器会话总是会被关闭
    if let Err(e) = data_service.run_once().await {
        error!("Failed to persist scraped data: {}", e);
    }

    if let Err(e) = data_service.shutdown().await {
        error!("Failed to close driver: {}", e);
    }

    Ok(())
}
