use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_client::{
    ApiClient, ClientConfig, ClientResult,
    dto::{
        chat::ChatRequest,
        orders::{CreateOrderRequest, OrderStatus},
        products::{ImageUpload, JsonField, ProductForm},
    },
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Command-line access to the storefront backend", long_about = None)]
struct Cli {
    /// Backend origin, or a development proxy in front of it
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is up
    Health,
    /// List shops
    Shops,
    /// Browse the catalog
    Products {
        #[command(subcommand)]
        cmd: ProductsCmd,
    },
    /// Place, inspect and refund orders
    Orders {
        #[command(subcommand)]
        cmd: OrdersCmd,
    },
    /// Catalog and order administration
    Admin {
        #[command(subcommand)]
        cmd: AdminCmd,
    },
    /// Talk to customer service
    Chat {
        message: String,
        #[arg(long)]
        session_id: Option<String>,
        #[arg(long)]
        product_id: Option<String>,
        #[arg(long)]
        shop_id: Option<String>,
        #[arg(long)]
        order_no: Option<String>,
        /// Start the session over
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ProductsCmd {
    /// Active products
    List,
    /// One product by id
    Show { id: String },
    /// Every product, inactive ones included
    Db,
}

#[derive(Subcommand, Debug)]
enum OrdersCmd {
    List,
    Show {
        order_no: String,
    },
    Create {
        #[arg(long)]
        product_id: String,
        #[arg(long, default_value_t = 1)]
        qty: u32,
        #[arg(long)]
        receiver: Option<String>,
        #[arg(long)]
        phone_tail: Option<String>,
    },
    Refund {
        order_no: String,
        #[arg(long)]
        reason: Option<String>,
    },
    Delete {
        order_no: String,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCmd {
    Products {
        #[command(subcommand)]
        cmd: AdminProductsCmd,
    },
    Orders {
        #[command(subcommand)]
        cmd: AdminOrdersCmd,
    },
}

#[derive(Subcommand, Debug)]
enum AdminProductsCmd {
    Create {
        #[arg(long)]
        shop_id: String,
        #[arg(long)]
        title: String,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Edit a product; fields left out keep their current value
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: ProductFields,
    },
    Delete {
        id: String,
    },
    Toggle {
        id: String,
        #[arg(action = clap::ArgAction::Set)]
        active: bool,
    },
    /// Upload an image and print its URL
    Upload {
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ProductFields {
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    price: Option<f64>,
    #[arg(long)]
    description: Option<String>,
    /// Spec data as JSON text
    #[arg(long)]
    specs_json: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    /// Carousel image URLs
    #[arg(long = "carousel-image")]
    carousel_images: Vec<String>,
    #[arg(long)]
    detailed_text: Option<String>,
}

impl ProductFields {
    fn apply(self, form: &mut ProductForm) {
        if let Some(category) = self.category {
            form.category = Some(category);
        }
        if let Some(price) = self.price {
            form.price = Some(price);
        }
        if let Some(description) = self.description {
            form.description = Some(description);
        }
        if let Some(specs) = self.specs_json {
            form.specs_json = JsonField::Encoded(specs);
        }
        if let Some(image_url) = self.image_url {
            form.image_url = Some(image_url);
        }
        if !self.carousel_images.is_empty() {
            form.carousel_images = self.carousel_images.into();
        }
        if let Some(detailed_text) = self.detailed_text {
            form.detailed_text = Some(detailed_text);
        }
    }
}

#[derive(Subcommand, Debug)]
enum AdminOrdersCmd {
    Status { order_no: String, status: OrderStatus },
    Delete { order_no: String },
}

/// Environment settings with the command-line flags laid over them.
fn build_config(cli: &Cli) -> ClientResult<ClientConfig> {
    apply_overrides(cli, ClientConfig::from_env()?)
}

fn apply_overrides(cli: &Cli, mut config: ClientConfig) -> ClientResult<ClientConfig> {
    if let Some(base_url) = cli.base_url.as_deref() {
        config = ClientConfig::new(base_url)?.with_timeout(config.timeout);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = build_config(&cli)?;
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "client configured");
    let api = ApiClient::new(config)?;

    match cli.command {
        Command::Health => print_json(&api.health().await?),
        Command::Shops => print_json(&api.list_shops().await?),
        Command::Products { cmd } => run_products(&api, cmd).await,
        Command::Orders { cmd } => run_orders(&api, cmd).await,
        Command::Admin { cmd } => run_admin(&api, cmd).await,
        Command::Chat {
            message,
            session_id,
            product_id,
            shop_id,
            order_no,
            reset,
        } => {
            let request = ChatRequest {
                session_id,
                message,
                reset,
                product_id,
                shop_id,
                order_no,
            };
            print_json(&api.chat(&request).await?)
        }
    }
}

async fn run_products(api: &ApiClient, cmd: ProductsCmd) -> anyhow::Result<()> {
    match cmd {
        ProductsCmd::List => print_json(&api.fetch_products().await?),
        ProductsCmd::Show { id } => print_json(
            &api.fetch_product_detail(&id)
                .await
                .with_context(|| format!("fetching product {id}"))?,
        ),
        ProductsCmd::Db => print_json(&api.list_products_db().await?),
    }
}

async fn run_orders(api: &ApiClient, cmd: OrdersCmd) -> anyhow::Result<()> {
    match cmd {
        OrdersCmd::List => print_json(&api.list_orders().await?),
        OrdersCmd::Show { order_no } => print_json(
            &api.get_order(&order_no)
                .await
                .with_context(|| format!("fetching order {order_no}"))?,
        ),
        OrdersCmd::Create {
            product_id,
            qty,
            receiver,
            phone_tail,
        } => {
            let payload = CreateOrderRequest {
                product_id,
                qty,
                receiver,
                phone_tail,
            };
            print_json(&api.create_order(&payload).await?)
        }
        OrdersCmd::Refund { order_no, reason } => print_json(
            &api.refund_order(&order_no, reason.as_deref())
                .await
                .with_context(|| format!("refunding order {order_no}"))?,
        ),
        OrdersCmd::Delete { order_no } => print_json(&api.delete_order(&order_no).await?),
    }
}

async fn run_admin(api: &ApiClient, cmd: AdminCmd) -> anyhow::Result<()> {
    match cmd {
        AdminCmd::Products { cmd } => match cmd {
            AdminProductsCmd::Create {
                shop_id,
                title,
                fields,
            } => {
                let mut form = ProductForm::new(shop_id, title);
                fields.apply(&mut form);
                print_json(&api.create_product(&form).await?)
            }
            AdminProductsCmd::Update { id, title, fields } => {
                let current = api
                    .fetch_product_detail(&id)
                    .await
                    .with_context(|| format!("fetching product {id}"))?;
                let mut form = ProductForm::from(&current);
                if let Some(title) = title {
                    form.title = title;
                }
                fields.apply(&mut form);
                print_json(&api.update_product(&id, &form).await?)
            }
            AdminProductsCmd::Delete { id } => print_json(&api.delete_product(&id).await?),
            AdminProductsCmd::Toggle { id, active } => {
                print_json(&api.toggle_product(&id, active).await?)
            }
            AdminProductsCmd::Upload { path } => {
                let file = ImageUpload::from_path(&path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                let uploaded = api.upload_image(file).await?;
                print_json(&serde_json::json!({
                    "url": uploaded.url,
                    "resolved": api.asset_url(&uploaded.url)?.as_str(),
                }))
            }
        },
        AdminCmd::Orders { cmd } => match cmd {
            AdminOrdersCmd::Status { order_no, status } => {
                print_json(&api.admin_update_order(&order_no, status).await?)
            }
            AdminOrdersCmd::Delete { order_no } => {
                print_json(&api.admin_delete_order(&order_no).await?)
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
