//! System prompt for the shopping assistant, built from the live catalog.

use std::fmt::Write;

use client::catalog::products;

const PERSONA: &str = "You are the Nike Store shopping assistant. Help shoppers find the right shoe \
from the catalog below. Be friendly and concise, use Markdown for lists, quote prices exactly as \
listed, and only recommend products from this catalog. If asked about anything unrelated to \
shopping for shoes, steer the conversation back politely.";

/// Persona plus one line per product (name, category, price, sizes, colors).
pub fn system_prompt() -> String {
    let mut out = String::from(PERSONA);
    out.push_str("\n\nCatalog:\n");
    for p in products() {
        let sizes: Vec<String> = p.sizes.iter().map(ToString::to_string).collect();
        let _ = writeln!(
            out,
            "- {} ({}, {}): sizes {}; colors {}. {}",
            p.name,
            p.category,
            p.price,
            sizes.join(", "),
            p.colors.join(", "),
            p.description
        );
    }
    out.push_str("\nShipping is free. Orders include 8% sales tax.");
    out
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
