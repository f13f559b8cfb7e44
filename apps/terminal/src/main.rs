//! # Matsuri Terminal POS
//!
//! The composition root: constructs the one [`Store`] and the one
//! [`JsonStorage`] at startup, injects nothing globally, and drives the
//! store through a line-oriented command loop.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, to stderr                     │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Determine Store Path ─────────────────────────────────────────────► │
//! │     • Linux: ~/.local/share/matsuri-pos/store.json                      │
//! │     • macOS: ~/Library/Application Support/jp.matsuri.pos/store.json    │
//! │     • Override: MATSURI_DATA_PATH                                       │
//! │                                                                         │
//! │  3. Load State ───────────────────────────────────────────────────────► │
//! │     • missing file → factory defaults (first run)                       │
//! │     • corrupt file → factory defaults, warn logged                      │
//! │                                                                         │
//! │  4. Run Command Loop ─────────────────────────────────────────────────► │
//! │     • every mutating command is followed by storage.save()              │
//! │       (the thin save observer - the store itself does no I/O)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use matsuri_core::{CategoryDraft, Money, PaymentMethod, ProductDraft, ProductPatch};
use matsuri_store::{export_filename, write_sales_csv, JsonStorage, Store};

/// What the command loop should do after a command.
enum Outcome {
    /// Keep going; `mutated` decides whether the save observer fires.
    Continue { mutated: bool },
    /// Leave the loop.
    Quit,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let path = store_file_path()?;
    info!(path = %path.display(), "Starting Matsuri POS terminal");

    let storage = JsonStorage::new(path);
    let mut store = Store::new(storage.load());

    println!("Matsuri POS - type 'help' for commands");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("matsuri> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match run_command(&mut store, &tokens) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue { mutated }) => {
                if mutated {
                    // The save observer: persistence happens here, at the
                    // composition boundary, never inside the store
                    storage.save(store.state())?;
                }
            }
            Err(e) => println!("error: {e}"),
        }
    }

    println!("またのご利用をお待ちしております");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the prompt.
/// Override the level with e.g. `RUST_LOG=matsuri_store=debug`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Determines the persisted store file path.
///
/// Set `MATSURI_DATA_PATH` to use a custom path (handy for a rehearsal
/// till that must not touch the real data).
fn store_file_path() -> Result<PathBuf, Box<dyn Error>> {
    if let Ok(path) = std::env::var("MATSURI_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("jp", "matsuri", "pos")
        .ok_or("Could not determine app data directory")?;

    Ok(proj_dirs.data_dir().join("store.json"))
}

/// Dispatches one command line against the store.
fn run_command(store: &mut Store, tokens: &[&str]) -> Result<Outcome, Box<dyn Error>> {
    let read_only = Ok(Outcome::Continue { mutated: false });
    let mutated = Ok(Outcome::Continue { mutated: true });

    match tokens {
        ["help"] => {
            print_help();
            read_only
        }
        ["quit"] | ["exit"] => Ok(Outcome::Quit),

        // --- reads -------------------------------------------------------
        ["grid"] => {
            print_grid(store);
            read_only
        }
        ["cart"] => {
            print_cart(store);
            read_only
        }
        ["orders", rest @ ..] => {
            let date = parse_date(rest.first())?;
            print_orders(store, date);
            read_only
        }
        ["sales", rest @ ..] => {
            let date = parse_date(rest.first())?;
            print_summary(store, date);
            read_only
        }
        ["export", rest @ ..] => {
            let date = parse_date(rest.first())?;
            let filename = export_filename(date);
            let file = File::create(&filename)?;
            write_sales_csv(file, &store.orders_on(date))?;
            println!("wrote {filename}");
            read_only
        }

        // --- cart --------------------------------------------------------
        ["add", id] => {
            store.add_to_cart(id)?;
            print_cart(store);
            read_only // cart is transient, nothing to persist
        }
        ["rm", id] => {
            store.remove_from_cart(id);
            print_cart(store);
            read_only
        }
        ["qty", id, n] => {
            store.set_cart_quantity(id, n.parse()?);
            print_cart(store);
            read_only
        }
        ["clear"] => {
            store.clear_cart();
            read_only
        }

        // --- checkout ----------------------------------------------------
        ["pay", "cash", received] => {
            let received = Money::from_yen(received.parse()?);
            let order = store.complete_order(PaymentMethod::Cash, Some(received))?;
            println!(
                "注文 {} 小計 {} お預かり {} お釣り {}",
                order.id,
                order.subtotal,
                received,
                order.change.unwrap_or(Money::zero()),
            );
            mutated
        }
        ["pay", "paypay"] => {
            let order = store.complete_order(PaymentMethod::PayPay, None)?;
            println!("注文 {} 小計 {} (PayPay)", order.id, order.subtotal);
            mutated
        }
        ["pay", "other"] => {
            let order = store.complete_order(PaymentMethod::OtherElectronic, None)?;
            println!("注文 {} 小計 {} (その他電子)", order.id, order.subtotal);
            mutated
        }

        // --- ledger ------------------------------------------------------
        ["cancel", id] => {
            store.cancel_order(id);
            mutated
        }
        ["clear-orders"] => {
            store.clear_orders();
            mutated
        }

        // --- catalog -----------------------------------------------------
        ["product", "add", price, category_id, name @ ..] if !name.is_empty() => {
            let product = store.add_product(ProductDraft {
                name: name.join(" "),
                price: Money::from_yen(price.parse()?),
                category_id: (*category_id).to_string(),
                stock: None,
                is_available: true,
            })?;
            println!("added {} ({})", product.name, product.id);
            mutated
        }
        ["product", "price", id, yen] => {
            store.update_product(
                id,
                &ProductPatch {
                    price: Some(Money::from_yen(yen.parse()?)),
                    ..Default::default()
                },
            );
            mutated
        }
        ["product", "toggle", id] => {
            let currently = store
                .products()
                .iter()
                .find(|p| p.id == *id)
                .map(|p| p.is_available);
            if let Some(currently) = currently {
                store.update_product(
                    id,
                    &ProductPatch {
                        is_available: Some(!currently),
                        ..Default::default()
                    },
                );
            } else {
                println!("unknown product: {id}");
            }
            mutated
        }
        ["product", "rm", id] => {
            store.delete_product(id);
            mutated
        }
        ["category", "add", color, name @ ..] if !name.is_empty() => {
            let category = store.add_category(CategoryDraft {
                name: name.join(" "),
                color: (*color).to_string(),
            })?;
            println!("added {} ({})", category.name, category.id);
            mutated
        }

        // --- reset -------------------------------------------------------
        ["reset"] => {
            store.reset_all_data();
            mutated
        }

        _ => {
            println!("unknown command - type 'help'");
            read_only
        }
    }
}

fn parse_date(arg: Option<&&str>) -> Result<NaiveDate, Box<dyn Error>> {
    match arg {
        Some(s) => Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?),
        None => Ok(Local::now().date_naive()),
    }
}

fn print_help() {
    println!(
        "\
  grid                                  product grid by category
  cart                                  show the cart
  add/rm <product-id>                   add to / remove from cart
  qty <product-id> <n>                  set line quantity (0 removes)
  clear                                 empty the cart
  pay cash <received-yen>               cash checkout (prints change)
  pay paypay | pay other                electronic checkout
  orders [YYYY-MM-DD]                   the day's orders, newest first
  cancel <order-id>                     remove an order
  clear-orders                          wipe the ledger (catalog kept)
  sales [YYYY-MM-DD]                    daily summary
  export [YYYY-MM-DD]                   write sales_YYYYMMDD.csv here
  product add <yen> <category-id> <name...>
  product price <product-id> <yen>
  product toggle <product-id>           hide/show on the grid
  product rm <product-id>
  category add <color> <name...>
  reset                                 factory defaults, ledger wiped
  quit"
    );
}

fn print_grid(store: &Store) {
    for category in store.categories() {
        println!("[{}]", category.name);
        for product in store
            .products()
            .iter()
            .filter(|p| p.category_id == category.id && p.is_available)
        {
            println!("  {:<12} {:>6}  {}", product.id, product.price.to_string(), product.name);
        }
    }
}

fn print_cart(store: &Store) {
    if store.cart().is_empty() {
        println!("(cart empty)");
        return;
    }
    for item in store.cart().items() {
        println!(
            "  {} x{}  {}",
            item.product.name,
            item.quantity,
            item.line_total()
        );
    }
    println!("  小計 {}", store.cart_subtotal());
}

fn print_orders(store: &Store, date: NaiveDate) {
    let orders = store.orders_on(date);
    if orders.is_empty() {
        println!("(no orders on {date})");
        return;
    }
    for order in orders {
        println!(
            "  {}  {}  {}  {}",
            order.created_at.format("%H:%M:%S"),
            order.id,
            order.subtotal,
            order.payment_method.label()
        );
    }
}

fn print_summary(store: &Store, date: NaiveDate) {
    let summary = store.summarize(date);

    println!("売上合計 {}", summary.total_sales);
    println!("注文件数 {}件 / 販売個数 {}個", summary.total_orders, summary.total_items);
    println!(
        "内訳: 現金 {} / PayPay {} / その他電子 {}",
        summary.by_payment_method.cash,
        summary.by_payment_method.paypay,
        summary.by_payment_method.other_electronic
    );

    if !summary.by_product.is_empty() {
        println!("商品別:");
        for entry in &summary.by_product {
            println!("  {:<20} x{:<4} {}", entry.product_name, entry.quantity, entry.total);
        }
    }

    println!("時間帯別:");
    let max_sales = summary
        .by_hour
        .iter()
        .map(|b| b.sales.yen())
        .max()
        .unwrap_or(0)
        .max(1);
    for bucket in &summary.by_hour {
        let bar = "#".repeat((bucket.sales.yen() * 24 / max_sales) as usize);
        println!("  {:>2}時 {:<24} {} ({}件)", bucket.hour, bar, bucket.sales, bucket.orders);
    }
}
