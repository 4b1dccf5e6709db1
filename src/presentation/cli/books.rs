use anyhow::Result;
use clap::{Args, Subcommand};

use super::macros::{define_delete_command, define_get_command};
use super::print_json;
use crate::domain::ids::BookRecordId;
use crate::domain::records::BookRecord;
use crate::infrastructure::client::ReadstatsClient;

#[derive(Debug, Subcommand)]
pub enum BookCommands {
    /// Add a finished book
    Add(AddBookCommand),
    /// List finished books
    List(ListBooksCommand),
    /// Get a book by ID
    Get(GetBookCommand),
    /// Delete a book
    Delete(DeleteBookCommand),
}

pub async fn run(client: &ReadstatsClient, cmd: BookCommands) -> Result<()> {
    match cmd {
        BookCommands::Add(c) => add_book(client, c).await,
        BookCommands::List(c) => list_books(client, c).await,
        BookCommands::Get(c) => get_book(client, c).await,
        BookCommands::Delete(c) => delete_book(client, c).await,
    }
}

#[derive(Debug, Args)]
pub struct AddBookCommand {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub author: String,
    /// Book type, e.g. Fiction or Non-Fiction
    #[arg(long = "type")]
    pub book_type: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub rating: Option<f64>,
    #[arg(long)]
    pub goodreads_rating: Option<f64>,
    /// Where the book came from, e.g. Library
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub cover_url: Option<String>,
    #[arg(long)]
    pub num_ratings: Option<i64>,
    #[arg(long)]
    pub num_editions: Option<i64>,
}

impl AddBookCommand {
    fn into_record(self) -> BookRecord {
        BookRecord {
            title: self.title,
            author: self.author,
            book_type: self.book_type,
            genre: self.genre,
            year_read: self.year,
            rating: self.rating,
            goodreads_rating: self.goodreads_rating,
            source: self.source,
            cover_url: self.cover_url,
            num_ratings: self.num_ratings,
            num_editions: self.num_editions,
        }
    }
}

pub async fn add_book(client: &ReadstatsClient, command: AddBookCommand) -> Result<()> {
    let book = client.books().create(&command.into_record()).await?;
    print_json(&book)
}

#[derive(Debug, Args)]
pub struct ListBooksCommand {
    /// Only books read in this year
    #[arg(long)]
    pub year: Option<i32>,
}

pub async fn list_books(client: &ReadstatsClient, command: ListBooksCommand) -> Result<()> {
    let books = client.books().list(command.year).await?;
    print_json(&books)
}

define_get_command!(GetBookCommand, get_book, BookRecordId, books);
define_delete_command!(DeleteBookCommand, delete_book, BookRecordId, books, "book");
