//! # Customer Directory
//!
//! Registered customers, one `;`-separated line each:
//!
//! ```text
//! id;name;phone;national_id;address
//! 1001;Alice Tan;012-3456789;900101-14-5678;12 Jalan Mawar, Kuala Lumpur
//! ```
//!
//! Names and addresses contain spaces, which is why this file uses `;`
//! where the car files use whitespace. Quoting is off in both directions:
//! a `"` in an address is an ordinary character.
//!
//! The file is append-only. Customers are never edited or deleted.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use fleetdesk_core::validation::validate_new_customer;
use fleetdesk_core::{Customer, NewCustomer, FIRST_CUSTOMER_ID};

use crate::error::{StoreError, StoreResult};
use crate::flatfile::FlatFile;

const DELIMITER: u8 = b';';
const CUSTOMER_FIELDS: usize = 5;

/// Store for the customer file.
///
/// ## Usage
/// ```rust,ignore
/// let mut customers = CustomerDirectory::load("Customer.txt")?;
/// let alice = customers.register(new_customer)?;   // id 1001 on an empty file
/// assert_eq!(customers.find_by_id(alice.id), Some(&alice));
/// ```
#[derive(Debug)]
pub struct CustomerDirectory {
    file: FlatFile,
    customers: Vec<Customer>,
    skipped: usize,
}

impl CustomerDirectory {
    /// Loads the directory. A missing file is an empty directory.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let file = FlatFile::new(path);
        let contents = file.read_to_string()?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(contents.as_bytes());

        let mut customers = Vec::new();
        let mut skipped = 0;
        let mut record = csv::StringRecord::new();

        loop {
            let line = reader.position().line() as usize;
            match reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {
                    if record.iter().all(|field| field.trim().is_empty()) {
                        continue;
                    }
                    let line = record.position().map_or(line, |p| p.line() as usize);
                    match decode(&record) {
                        Ok(customer) => customers.push(customer),
                        Err(reason) => {
                            skipped += 1;
                            warn!(
                                "{}",
                                StoreError::MalformedRecord {
                                    path: file.path().to_path_buf(),
                                    line,
                                    reason,
                                }
                            );
                        }
                    }
                }
                Err(e) => {
                    skipped += 1;
                    warn!(
                        "{}",
                        StoreError::MalformedRecord {
                            path: file.path().to_path_buf(),
                            line,
                            reason: e.to_string(),
                        }
                    );
                }
            }
        }

        info!(
            path = %file.path().display(),
            customers = customers.len(),
            skipped,
            "Customers loaded"
        );

        Ok(CustomerDirectory {
            file,
            customers,
            skipped,
        })
    }

    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Id the next registration will get: one past the largest id on file,
    /// or 1001 for an empty directory.
    pub fn next_id(&self) -> u32 {
        self.customers
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(FIRST_CUSTOMER_ID, |max| max.saturating_add(1))
    }

    /// Assigns the next id and stores the customer.
    pub fn register(&mut self, customer: NewCustomer) -> StoreResult<Customer> {
        let customer = customer.with_id(self.next_id());
        self.add(customer.clone())?;
        Ok(customer)
    }

    /// Appends a customer whose id the caller chose.
    ///
    /// ## Errors
    /// - `Validation` if a field contains `;` or a line break, or the name
    ///   is empty
    /// - `Duplicate` if the id is already taken
    /// - `StorageUnavailable` if the append fails (directory unchanged)
    pub fn add(&mut self, customer: Customer) -> StoreResult<()> {
        validate_new_customer(&NewCustomer {
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            national_id: customer.national_id.clone(),
            address: customer.address.clone(),
        })?;

        if self.find_by_id(customer.id).is_some() {
            return Err(StoreError::duplicate("customer id", customer.id));
        }

        self.file.append(&encode(&customer)?)?;
        info!(customer_id = customer.id, "Customer registered");
        self.customers.push(customer);
        Ok(())
    }
}

fn encode(customer: &Customer) -> StoreResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record([
            customer.id.to_string().as_str(),
            customer.name.as_str(),
            customer.phone.as_str(),
            customer.national_id.as_str(),
            customer.address.as_str(),
        ])
        .map_err(|e| StoreError::Encoding(e.to_string()))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::Encoding(e.to_string()))?;
    let line = String::from_utf8(bytes).map_err(|e| StoreError::Encoding(e.to_string()))?;

    debug!(customer_id = customer.id, "Customer encoded");
    Ok(line)
}

fn decode(record: &csv::StringRecord) -> Result<Customer, String> {
    if record.len() != CUSTOMER_FIELDS {
        return Err(format!(
            "expected {} fields, found {}",
            CUSTOMER_FIELDS,
            record.len()
        ));
    }

    let id = record[0]
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("customer id '{}' is not a number", &record[0]))?;

    Ok(Customer {
        id,
        name: record[1].to_string(),
        phone: record[2].to_string(),
        national_id: record[3].to_string(),
        address: record[4].trim_end_matches('\r').to_string(),
    })
}
