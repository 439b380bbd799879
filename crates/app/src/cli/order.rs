use std::str::FromStr;

use clap::Args;
use sagal::{cart::Cart, catalog::Catalog, customer::CustomerInfo, products::ProductId};
use sagal_app::{
    checkout::{CheckoutSession, Receipt},
    config::ClientConfig,
    connectivity::ConnectivityMonitor,
    orders::HttpOrdersService,
    status::HttpStatusService,
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Customer's full name
    #[arg(long)]
    name: String,

    /// Contact phone number
    #[arg(long)]
    phone: String,

    /// Delivery address
    #[arg(long)]
    address: String,

    /// Product to order as `ID` or `ID:QTY`; repeat for more products
    #[arg(long = "item", required = true)]
    items: Vec<ItemSpec>,
}

/// A product id with an optional quantity, written `ID[:QTY]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemSpec {
    product: ProductId,
    quantity: u32,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = s.split_once(':').unwrap_or((s, "1"));

        let product = id
            .trim()
            .parse::<u32>()
            .map_err(|error| format!("invalid product id {id:?}: {error}"))?;

        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|error| format!("invalid quantity {quantity:?}: {error}"))?;

        if quantity == 0 {
            return Err(format!("quantity for product {product} must be at least 1"));
        }

        Ok(Self {
            product: ProductId::new(product),
            quantity,
        })
    }
}

#[expect(clippy::print_stdout, reason = "order progress is the command's output")]
pub(crate) async fn run(config: &ClientConfig, args: OrderArgs) -> Result<(), String> {
    let catalog = config
        .catalog
        .load()
        .map_err(|error| format!("failed to load catalog: {error}"))?;

    let client = config
        .api
        .client()
        .map_err(|error| format!("failed to build API client: {error}"))?;

    let connectivity = ConnectivityMonitor::new();
    let mut session = CheckoutSession::new(&catalog, connectivity.clone());

    fill_cart(session.cart_mut(), &catalog, &args.items)?;

    *session.customer_mut() = CustomerInfo::new(args.name, args.phone, args.address);

    session.prepare_order().map_err(|error| error.message())?;

    println!("{}", cart_table(session.cart()));

    let status = connectivity
        .check(&HttpStatusService::new(client.clone()))
        .await;

    println!("connection: {}", status.label());

    let receipt = session
        .place_order(&HttpOrdersService::new(client))
        .await
        .map_err(|error| {
            if error.is_retryable() {
                format!("{} You can safely try again.", error.message())
            } else {
                error.message()
            }
        })?;

    print_receipt(&receipt);

    Ok(())
}

fn fill_cart(cart: &mut Cart, catalog: &Catalog, items: &[ItemSpec]) -> Result<(), String> {
    for item in items {
        let product = catalog
            .get(item.product)
            .ok_or_else(|| format!("unknown product id {}", item.product))?;

        let quantity = cart.add(product);

        cart.update_quantity(
            product.id(),
            quantity.saturating_add(item.quantity.saturating_sub(1)),
        );
    }

    Ok(())
}

fn cart_table(cart: &Cart) -> String {
    let currency = cart.currency();
    let mut builder = Builder::default();

    builder.push_record(["Product", "Qty", "Unit Price", "Line Total"]);

    for item in cart.iter() {
        builder.push_record([
            item.product().name().to_string(),
            item.quantity().to_string(),
            item.product().price().to_money(currency).to_string(),
            item.line_total().to_money(currency).to_string(),
        ]);
    }

    builder.push_record([
        "Total".to_string(),
        cart.total_item_count().to_string(),
        String::new(),
        cart.total_amount().to_string(),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Rows::last(), Color::BOLD);
    table.modify(Columns::new(1..4), Alignment::right());

    table.to_string()
}

#[expect(clippy::print_stdout, reason = "the receipt is the command's output")]
fn print_receipt(receipt: &Receipt) {
    println!("Order placed successfully!");
    println!("order_number: {}", receipt.confirmation.order_number);
    println!("total_amount: {}", receipt.confirmation.total_amount);
    println!("customer: {}", receipt.customer_name);
    println!("phone: {}", receipt.phone);
    println!("items: {}", receipt.item_count);
    println!("placed_at: {}", receipt.placed_at);
    println!("We will contact you shortly to confirm delivery.");
}
