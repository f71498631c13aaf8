use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use tonic::metadata::{Ascii, MetadataKey, MetadataValue};

use bookstore::client::BookstoreClient as HttpClient;
use bookstore::config::DEFAULT_SIGNAL_KEY;
use bookstore::grpc::bookstore as pb;
use bookstore::grpc::{
    BookstoreClient as GrpcClient, CreateBookRequest, CreateShelfRequest, DeleteBookRequest,
    DeleteShelfRequest, GetBookRequest, GetShelfRequest, ListBooksRequest,
};
use bookstore::store::{Book, ResourceId, Shelf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Protocol {
    Grpc,
    Http,
}

impl Protocol {
    fn default_addr(self) -> &'static str {
        match self {
            Protocol::Http => "127.0.0.1:8080",
            Protocol::Grpc => "127.0.0.1:8082",
        }
    }
}

#[derive(Parser)]
#[command(name = "bookstore-client")]
#[command(about = "Issue a single bookstore call, optionally forcing a fault")]
struct Args {
    /// Transport to use
    #[arg(long, value_enum, default_value = "http")]
    protocol: Protocol,

    /// Server address (host:port), defaults to the protocol's standard listener
    #[arg(long)]
    addr: Option<String>,

    /// Fault name to request, e.g. ABORTED, INTERNAL, DATA_LOSS
    #[arg(long)]
    fault: Option<String>,

    /// Metadata key / header carrying the fault
    #[arg(long, default_value = DEFAULT_SIGNAL_KEY)]
    signal_key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    ListShelves,
    CreateShelf {
        #[arg(long)]
        theme: String,
    },
    GetShelf {
        shelf: ResourceId,
    },
    DeleteShelf {
        shelf: ResourceId,
    },
    ListBooks {
        shelf: ResourceId,
    },
    CreateBook {
        shelf: ResourceId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
    },
    GetBook {
        shelf: ResourceId,
        book: ResourceId,
    },
    DeleteBook {
        shelf: ResourceId,
        book: ResourceId,
    },
}

impl Args {
    fn addr(&self) -> &str {
        self.addr
            .as_deref()
            .unwrap_or_else(|| self.protocol.default_addr())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let output = match args.protocol {
        Protocol::Http => run_http(&args).await?,
        Protocol::Grpc => run_grpc(&args).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run_http(args: &Args) -> anyhow::Result<Value> {
    let mut client = HttpClient::new(args.addr())?.with_signal_key(args.signal_key.clone());
    if let Some(fault) = &args.fault {
        client = client.with_fault(fault.clone());
    }

    let output = match args.command.clone() {
        Command::ListShelves => json!({ "shelves": client.list_shelves().await? }),
        Command::CreateShelf { theme } => json!(client.create_shelf(&theme).await?),
        Command::GetShelf { shelf } => json!(client.get_shelf(shelf).await?),
        Command::DeleteShelf { shelf } => {
            client.delete_shelf(shelf).await?;
            json!({})
        }
        Command::ListBooks { shelf } => json!({ "books": client.list_books(shelf).await? }),
        Command::CreateBook {
            shelf,
            title,
            author,
        } => json!(client.create_book(shelf, &title, &author).await?),
        Command::GetBook { shelf, book } => json!(client.get_book(shelf, book).await?),
        Command::DeleteBook { shelf, book } => {
            client.delete_book(shelf, book).await?;
            json!({})
        }
    };
    Ok(output)
}

type Signal = (MetadataKey<Ascii>, MetadataValue<Ascii>);

fn signalled<M>(message: M, signal: Option<&Signal>) -> tonic::Request<M> {
    let mut request = tonic::Request::new(message);
    if let Some((key, value)) = signal {
        request.metadata_mut().insert(key.clone(), value.clone());
    }
    request
}

async fn run_grpc(args: &Args) -> anyhow::Result<Value> {
    let addr = args.addr();
    let addr = if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    };
    let mut client = GrpcClient::connect(addr.clone())
        .await
        .with_context(|| format!("failed to connect to {addr}"))?;

    let signal = match &args.fault {
        Some(fault) => {
            let key = MetadataKey::from_bytes(args.signal_key.as_bytes())
                .context("invalid signal key")?;
            let value = fault
                .parse::<MetadataValue<Ascii>>()
                .context("invalid fault value")?;
            Some((key, value))
        }
        None => None,
    };
    let signal = signal.as_ref();

    let output = match args.command.clone() {
        Command::ListShelves => {
            let response = client.list_shelves(signalled((), signal)).await?;
            let shelves: Vec<Shelf> = response
                .into_inner()
                .shelves
                .into_iter()
                .map(Into::into)
                .collect();
            json!({ "shelves": shelves })
        }
        Command::CreateShelf { theme } => {
            let message = CreateShelfRequest {
                shelf: Some(pb::Shelf { id: 0, theme }),
            };
            let shelf: Shelf = client
                .create_shelf(signalled(message, signal))
                .await?
                .into_inner()
                .into();
            json!(shelf)
        }
        Command::GetShelf { shelf } => {
            let shelf: Shelf = client
                .get_shelf(signalled(GetShelfRequest { shelf }, signal))
                .await?
                .into_inner()
                .into();
            json!(shelf)
        }
        Command::DeleteShelf { shelf } => {
            client
                .delete_shelf(signalled(DeleteShelfRequest { shelf }, signal))
                .await?;
            json!({})
        }
        Command::ListBooks { shelf } => {
            let response = client
                .list_books(signalled(ListBooksRequest { shelf }, signal))
                .await?;
            let books: Vec<Book> = response
                .into_inner()
                .books
                .into_iter()
                .map(Into::into)
                .collect();
            json!({ "books": books })
        }
        Command::CreateBook {
            shelf,
            title,
            author,
        } => {
            let message = CreateBookRequest {
                shelf,
                book: Some(pb::Book {
                    id: 0,
                    author,
                    title,
                }),
            };
            let book: Book = client
                .create_book(signalled(message, signal))
                .await?
                .into_inner()
                .into();
            json!(book)
        }
        Command::GetBook { shelf, book } => {
            let book: Book = client
                .get_book(signalled(GetBookRequest { shelf, book }, signal))
                .await?
                .into_inner()
                .into();
            json!(book)
        }
        Command::DeleteBook { shelf, book } => {
            client
                .delete_book(signalled(DeleteBookRequest { shelf, book }, signal))
                .await?;
            json!({})
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr_follows_protocol() {
        let http = Args::parse_from(["bookstore-client", "list-shelves"]);
        assert_eq!(http.addr(), "127.0.0.1:8080");

        let grpc = Args::parse_from(["bookstore-client", "--protocol", "grpc", "list-shelves"]);
        assert_eq!(grpc.addr(), "127.0.0.1:8082");
    }

    #[test]
    fn test_explicit_addr_wins() {
        let args = Args::parse_from([
            "bookstore-client",
            "--protocol",
            "grpc",
            "--addr",
            "10.0.0.5:9000",
            "get-shelf",
            "1",
        ]);
        assert_eq!(args.addr(), "10.0.0.5:9000");
        assert!(matches!(args.command, Command::GetShelf { shelf: 1 }));
    }
}
