// Rupee price labels in lakh / crore notation

use crate::models::Listing;

const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

// One decimal place of `price / unit`, rounded half up on the exact integer
// quotient. A browser's float `toFixed(1)` can round exact halves down
// (1.15 is stored below 1.15), so 115_000 is "₹1.2 L" here and "₹1.1 L" there.
fn tenths(price: u64, unit: u64) -> String {
    let scaled = (u128::from(price) * 10 + u128::from(unit) / 2) / u128::from(unit);
    format!("{}.{}", scaled / 10, scaled % 10)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_inr(price: u64) -> String {
    if price >= CRORE {
        format!("₹{} Cr", tenths(price, CRORE))
    } else if price >= LAKH {
        format!("₹{} L", tenths(price, LAKH))
    } else {
        format!("₹{}", group_thousands(price))
    }
}

pub fn price_label(listing: &Listing) -> String {
    let amount = format_inr(listing.price);
    if listing.is_per_day() {
        format!("{}/day", amount)
    } else {
        amount
    }
}
