use clap::Args;
use sagal::{
    catalog::Catalog,
    products::{Category, Product},
};
use sagal_app::config::ClientConfig;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Only list products in this category (gas, cooker, pipes)
    #[arg(long)]
    category: Option<Category>,
}

#[expect(clippy::print_stdout, reason = "the catalog table is the command's output")]
pub(crate) fn run(config: &ClientConfig, args: &CatalogArgs) -> Result<(), String> {
    let catalog = config
        .catalog
        .load()
        .map_err(|error| format!("failed to load catalog: {error}"))?;

    let products: Vec<&Product> = catalog.in_category(args.category).collect();

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    println!("{}", catalog_table(&catalog, &products));

    Ok(())
}

fn catalog_table(catalog: &Catalog, products: &[&Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Product", "Category", "Price"]);

    for product in products {
        builder.push_record([
            product.id().to_string(),
            product.name().to_string(),
            product.category().to_string(),
            product.price().to_money(catalog.currency()).to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..4), Alignment::right());

    table.to_string()
}
