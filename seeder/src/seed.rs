use colored::*;
use futures::FutureExt;
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

pub type SeedFuture<'a> = Pin<Box<dyn Future<Output = Result<usize, DbErr>> + Send + 'a>>;

/// A unit of demo data. Returns the number of rows inserted.
pub trait Seeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a>;
}

pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
) -> anyhow::Result<usize> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush()?;

    let start = Instant::now();
    match std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await
    {
        Ok(Ok(rows)) => {
            let time_str = format!("({:.2?}, {} rows)", start.elapsed(), rows).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(rows)
        }
        Ok(Err(e)) => {
            println!("{}", "failed".red());
            Err(anyhow::Error::new(e).context(format!("seeding {name}")))
        }
        Err(_) => {
            println!("{}", "failed".red());
            anyhow::bail!("seeder {name} panicked")
        }
    }
}
