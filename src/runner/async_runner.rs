use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{
    csv_utils::write_csv,
    dto::{RequestRow, ResponseRow},
    handler::handle,
    service::AccountService,
    stores::AccountRepository,
};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::info;

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Replays the operations in the given input file asynchronously against `service`
/// and writes the responses to the provided writer.
/// Spawns two tasks:
/// * CSV reader - streams operations from the input file, deserializes them and sends them to the processor via channel.
/// * Processor - receives operations from the channel and handles them in order until the channel is closed.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing operations
/// * `writer` - Where to write the responses (e.g. stdout)
/// * `service` - The account service the operations are applied to
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub async fn run<P, W, R>(input_path: P, writer: W, service: AccountService<R>) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
    R: AccountRepository + 'static,
{
    // Create channel for passing operations from reader to processor
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();
    info!(input = %input_path.display(), "replaying operations");

    let reader_handle = tokio::spawn(read_operations(input_path, tx));
    let processor_handle = tokio::spawn(process_operations(rx, service));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    let responses = processor_handle.await?;
    info!(rows = responses.len(), "replay finished");

    write_csv(writer, responses.into_iter())?;
    Ok(())
}

/// Streams operations from a CSV file into the provided channel.
/// Field values are left untouched so credentials arrive verbatim.
async fn read_operations(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<RequestRow>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<RequestRow>();
    while let Some(result) = records.next().await {
        match result {
            Ok(row) => {
                if tx.send(row).await.is_err() {
                    // Receiver dropped, exit gracefully
                    break;
                }
            }
            // CSV parsing errors are critical - propagate them
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Handles operations received through the channel in arrival order.
/// Returns the response rows once the channel is closed by the reader.
async fn process_operations<R: AccountRepository>(
    mut rx: mpsc::Receiver<RequestRow>,
    service: AccountService<R>,
) -> Vec<ResponseRow> {
    let mut responses = Vec::new();
    let mut seq = 0;
    while let Some(row) = rx.recv().await {
        seq += 1;
        let op = row.op;
        let response = handle(&service, row.into());
        responses.extend(ResponseRow::from_response(seq, op, response));
    }
    responses
}
