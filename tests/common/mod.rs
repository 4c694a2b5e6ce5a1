#![allow(dead_code)]

use catalex::{Catalog, Price, Product, Rating};

/// The 15-product reference catalog, in insertion order.
///
/// Sorted by id it reads:
/// 1001, 1010, 1112, 1213, 1314, 1415, 1505, 2003, 3007, 4002, 5001, 6008, 7004, 8009, 9006
pub fn products() -> Vec<Product> {
    let rows: [(u32, &str, &str, &str, u64, u32, f64); 15] = [
        (1001, "iPhone 15 Pro", "Electronics", "Apple", 999_99, 50, 4.8),
        (2003, "Samsung Galaxy S24", "Electronics", "Samsung", 899_99, 75, 4.7),
        (1505, "MacBook Air M3", "Computers", "Apple", 1299_99, 30, 4.9),
        (3007, "Nike Air Max 270", "Footwear", "Nike", 149_99, 120, 4.5),
        (4002, "Adidas Ultraboost 22", "Footwear", "Adidas", 179_99, 95, 4.6),
        (5001, "Sony WH-1000XM5", "Audio", "Sony", 399_99, 60, 4.8),
        (6008, "Dell XPS 13", "Computers", "Dell", 1099_99, 40, 4.4),
        (7004, "Canon EOS R6", "Photography", "Canon", 2499_99, 15, 4.7),
        (8009, "Levi's 501 Jeans", "Clothing", "Levi's", 79_99, 200, 4.3),
        (9006, "Nintendo Switch OLED", "Gaming", "Nintendo", 349_99, 85, 4.6),
        (1010, "AirPods Pro 2", "Audio", "Apple", 249_99, 100, 4.7),
        (1112, "Google Pixel 8", "Electronics", "Google", 699_99, 65, 4.5),
        (1213, "Microsoft Surface Pro 9", "Computers", "Microsoft", 1299_99, 25, 4.4),
        (1314, "Bose QuietComfort 45", "Audio", "Bose", 329_99, 45, 4.6),
        (1415, "HP Pavilion 15", "Computers", "HP", 799_99, 55, 4.2),
    ];

    rows.into_iter()
        .map(|(id, name, category, brand, cents, stock, rating)| {
            Product::new(id, name, category, brand, Price::from_cents(cents))
                .with_stock(stock)
                .with_rating(Rating::new(rating).unwrap())
        })
        .collect()
}

pub fn catalog() -> Catalog {
    Catalog::build(products()).unwrap()
}

pub const SORTED_IDS: [u32; 15] = [
    1001, 1010, 1112, 1213, 1314, 1415, 1505, 2003, 3007, 4002, 5001, 6008, 7004, 8009, 9006,
];
