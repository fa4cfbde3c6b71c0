//! Static product catalog and the lookups the storefront runs against it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is compiled into the binary and never mutated, so every view
//! can borrow `&'static Product` freely. Stores copy what they need (the cart)
//! or keep a borrowed reference (quick view).

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;

use crate::util::money::Money;

/// Category sentinel meaning "no filter".
pub const ALL_CATEGORY: &str = "All";

/// Category filter options, in display order.
pub const CATEGORIES: &[&str] = &[ALL_CATEGORY, "Running", "Basketball", "Lifestyle", "Training"];

/// Quick search terms offered while the search query is empty.
pub const SEARCH_SUGGESTIONS: &[&str] = &["Air Max", "Air Force 1", "Running", "Basketball", "Training"];

/// A US shoe size held in tenths so it can be compared and hashed exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShoeSize(u16);

impl ShoeSize {
    #[must_use]
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    /// Whole sizes only; half sizes go through [`ShoeSize::from_tenths`].
    #[must_use]
    pub const fn whole(size: u16) -> Self {
        Self(size * 10)
    }

    #[must_use]
    pub const fn tenths(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ShoeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

/// A catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Money,
    /// Path of the product image under the site root.
    pub image: &'static str,
    pub category: &'static str,
    /// Available colors as `#rrggbb` hex strings.
    pub colors: &'static [&'static str],
    pub sizes: &'static [ShoeSize],
    pub description: &'static str,
}

const fn t(tenths: u16) -> ShoeSize {
    ShoeSize::from_tenths(tenths)
}

const SIZES_7_TO_12: &[ShoeSize] = &[t(70), t(75), t(80), t(85), t(90), t(95), t(100), t(105), t(110), t(120)];
const SIZES_6_TO_12: &[ShoeSize] =
    &[t(60), t(65), t(70), t(75), t(80), t(85), t(90), t(95), t(100), t(105), t(110), t(120)];
const SIZES_7_TO_13: &[ShoeSize] =
    &[t(70), t(75), t(80), t(85), t(90), t(95), t(100), t(105), t(110), t(120), t(130)];
const SIZES_6_TO_11: &[ShoeSize] = &[t(60), t(65), t(70), t(75), t(80), t(85), t(90), t(95), t(100), t(105), t(110)];
const SIZES_65_TO_11: &[ShoeSize] = &[t(65), t(70), t(75), t(80), t(85), t(90), t(95), t(100), t(105), t(110)];

static PRODUCTS: [Product; 8] = [
    Product {
        id: "1",
        name: "Nike Air Max Pulse",
        price: Money::from_dollars(189),
        image: "/assets/shoe-airmax-1.png",
        category: "Running",
        colors: &["#ffffff", "#000000", "#00B2FF"],
        sizes: SIZES_7_TO_12,
        description: "The Air Max Pulse pulls inspiration from the London music scene, bringing an energetic touch to the iconic Air Max line.",
    },
    Product {
        id: "2",
        name: "Nike Air Force 1 '07",
        price: Money::from_dollars(149),
        image: "/assets/shoe-airforce-1.png",
        category: "Lifestyle",
        colors: &["#ffffff", "#000000", "#FF006E"],
        sizes: SIZES_6_TO_12,
        description: "The radiance lives on in the Nike Air Force 1 '07, a clean, modern look that's icon-approved.",
    },
    Product {
        id: "3",
        name: "Nike Precision 7",
        price: Money::from_dollars(129),
        image: "/assets/shoe-basketball-1.png",
        category: "Basketball",
        colors: &["#000000", "#FF0000", "#ffffff"],
        sizes: SIZES_7_TO_13,
        description: "Built for the hardwood, designed for dominance. The Precision 7 delivers court-ready performance.",
    },
    Product {
        id: "4",
        name: "Nike Air Zoom Pegasus",
        price: Money::from_dollars(159),
        image: "/assets/shoe-training-1.png",
        category: "Running",
        colors: &["#ffffff", "#00B2FF", "#00FFC4"],
        sizes: SIZES_6_TO_11,
        description: "A springy ride for any run, the Pegasus keeps the speed coming with responsive cushioning.",
    },
    Product {
        id: "5",
        name: "Nike Court Legacy",
        price: Money::from_dollars(109),
        image: "/assets/shoe-retro-1.png",
        category: "Lifestyle",
        colors: &["#F5F5DC", "#8B0000", "#000000"],
        sizes: SIZES_6_TO_12,
        description: "Classic tennis heritage meets modern comfort. Timeless style for the streets.",
    },
    Product {
        id: "6",
        name: "Nike Free Run 5.0",
        price: Money::from_dollars(139),
        image: "/assets/shoe-running-2.png",
        category: "Running",
        colors: &["#808080", "#32CD32", "#ffffff"],
        sizes: SIZES_65_TO_11,
        description: "Feel the freedom of natural motion with flexible support and lightweight cushioning.",
    },
    Product {
        id: "7",
        name: "Nike Blazer Low",
        price: Money::from_dollars(119),
        image: "/assets/shoe-lifestyle-2.png",
        category: "Lifestyle",
        colors: &["#000080", "#ffffff", "#D2691E"],
        sizes: SIZES_6_TO_12,
        description: "Vintage basketball style modernized with a low-cut silhouette and premium materials.",
    },
    Product {
        id: "8",
        name: "Nike Metcon 9",
        price: Money::from_dollars(179),
        image: "/assets/shoe-training-1.png",
        category: "Training",
        colors: &["#ffffff", "#00B2FF", "#000000"],
        sizes: SIZES_7_TO_12,
        description: "From box jumps to burpees, the Metcon 9 is built to handle whatever your workout demands.",
    },
];

/// All products in catalog order.
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Look up a product by id.
pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Products in `category`, or everything for [`ALL_CATEGORY`].
pub fn filter_by_category(category: &str) -> Vec<&'static Product> {
    PRODUCTS
        .iter()
        .filter(|p| category == ALL_CATEGORY || p.category == category)
        .collect()
}

/// Case-insensitive substring match against name or category.
///
/// An empty query matches every product.
pub fn search(query: &str) -> Vec<&'static Product> {
    let needle = query.to_lowercase();
    PRODUCTS
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle))
        .collect()
}
