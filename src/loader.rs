//! Database loader adapter (C2): decouples the mining core from file
//! I/O. The core never reads a file directly - it only ever sees
//! `Vec<Transaction<I>>` handed to it by something implementing
//! [`Loader`].

use crate::errors::{MiningError, Result};
use crate::item::{ItemOccurrence, Transaction};
use std::cell::RefCell;
use std::io::BufRead;

/// Abstract source of transactions.
pub trait Loader<I> {
    fn load(&self) -> Result<Vec<Transaction<I>>>;
}

/// The trivial adapter: transactions already held in memory.
pub struct VecLoader<I> {
    transactions: Vec<Transaction<I>>,
}

impl<I: Clone> VecLoader<I> {
    pub fn new(transactions: Vec<Transaction<I>>) -> Self {
        Self { transactions }
    }
}

impl<I: Clone> Loader<I> for VecLoader<I> {
    fn load(&self) -> Result<Vec<Transaction<I>>> {
        Ok(self.transactions.clone())
    }
}

/// Reference loader for the documented input line format:
/// whitespace-separated tokens of the form `itemId(probability)`, one
/// transaction per line.
pub struct TextLoader<R> {
    reader: RefCell<R>,
}

impl<R: BufRead> TextLoader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: RefCell::new(reader),
        }
    }
}

impl<R: BufRead> Loader<String> for TextLoader<R> {
    fn load(&self) -> Result<Vec<Transaction<String>>> {
        let mut reader = self.reader.borrow_mut();
        let mut transactions = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            let bytes = reader.read_line(&mut buf)?;
            if bytes == 0 {
                break;
            }
            let line = buf.trim();
            if line.is_empty() {
                continue;
            }
            transactions.push(parse_line(line)?);
        }
        Ok(transactions)
    }
}

fn parse_line(line: &str) -> Result<Transaction<String>> {
    let mut occurrences = Vec::new();
    for token in line.split_whitespace() {
        let (item, probability) = parse_token(token)?;
        occurrences.push(ItemOccurrence::new(item, probability)?);
    }
    Ok(Transaction::new(occurrences))
}

fn parse_token(token: &str) -> Result<(String, f64)> {
    let open = token
        .find('(')
        .ok_or_else(|| MiningError::MalformedRecord(format!("missing '(' in token {token:?}")))?;
    if !token.ends_with(')') {
        return Err(MiningError::MalformedRecord(format!(
            "missing closing ')' in token {token:?}"
        )));
    }
    let item = token[..open].to_string();
    let prob_str = &token[open + 1..token.len() - 1];
    let probability: f64 = prob_str.parse().map_err(|_| {
        MiningError::MalformedRecord(format!("non-numeric probability in token {token:?}"))
    })?;
    Ok((item, probability))
}
