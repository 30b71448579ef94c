use std::error::Error;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::{
    csv_utils::{read_csv, write_csv},
    dto::{RequestRow, ResponseRow},
    handler::handle,
    service::AccountService,
    stores::AccountRepository,
};

/// Replays the operations in the given input file against `service` and writes
/// one response row per returned account to the provided writer.
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
///
/// Rejected operations (unknown ids, duplicates, invalid pages) are not errors;
/// they show up as non-200 rows in the output.
pub fn run<P, W, R>(input_path: P, writer: W, service: &AccountService<R>) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
    R: AccountRepository,
{
    info!(input = %input_path.as_ref().display(), "replaying operations");

    let mut responses = Vec::new();
    let rows = read_csv::<RequestRow, _>(input_path)?;
    for (seq, row) in (1..).zip(rows) {
        // CSV parsing errors are critical - propagate them
        let row = row?;
        let op = row.op;
        let response = handle(service, row.into());
        responses.extend(ResponseRow::from_response(seq, op, response));
    }

    info!(rows = responses.len(), "replay finished");
    write_csv(writer, responses.into_iter())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::fixtures::{EXAMPLE_OUTPUT, SEED_PAGES_OUTPUT};
    use crate::stores::{AccountsStore, UserAccount};
    use std::sync::Arc;

    #[test]
    fn test_example_input() -> Result<(), Box<dyn Error>> {
        let store = Arc::new(AccountsStore::seeded());
        let service = AccountService::new(Arc::clone(&store));

        let mut output = Vec::new();
        run("data/example_input.csv", &mut output, &service)?;
        assert_eq!(String::from_utf8(output)?, EXAMPLE_OUTPUT);

        // 5 seed accounts + "6" created - "3" deleted
        assert_eq!(store.len(), 5);
        assert!(store.read_account("3").is_err());
        Ok(())
    }

    #[test]
    fn test_seed_pages() -> Result<(), Box<dyn Error>> {
        let service = AccountService::new(AccountsStore::seeded());

        let mut output = Vec::new();
        run("data/seed_pages.csv", &mut output, &service)?;
        assert_eq!(String::from_utf8(output)?, SEED_PAGES_OUTPUT);
        Ok(())
    }

    #[test]
    fn test_empty_store() -> Result<(), Box<dyn Error>> {
        let service = AccountService::new(AccountsStore::new());

        let mut output = Vec::new();
        run("data/seed_pages.csv", &mut output, &service)?;

        let expected = "seq,op,status,id,email,username,credential,message
1,list,200,,,,,
2,list,200,,,,,
3,list,200,,,,,
4,list,200,,,,,
";
        assert_eq!(String::from_utf8(output)?, expected);
        Ok(())
    }

    #[test]
    fn test_field_values_are_not_trimmed() -> Result<(), Box<dyn Error>> {
        let store = Arc::new(AccountsStore::new());
        let service = AccountService::new(Arc::clone(&store));

        let mut output = Vec::new();
        run("data/padded_fields.csv", &mut output, &service)?;

        // Credential and the other fields are stored exactly as written
        let stored = store.read_account("7")?;
        assert_eq!(stored, UserAccount::new("7", " a@mail.com ", " a ", "  spaced secret  "));
        assert!(String::from_utf8(output)?.contains("  spaced secret  "));
        Ok(())
    }

    #[test]
    fn test_missing_input_file() {
        let service = AccountService::new(AccountsStore::seeded());
        let result = run("data/does_not_exist.csv", Vec::new(), &service);
        assert!(result.is_err());
    }
}
