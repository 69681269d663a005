// Built-in demo inventory, in the order the marketplace lists it

use once_cell::sync::Lazy;

use crate::models::{BodyType, FuelType, Listing, PriceBasis, Transmission};

const IMAGE_BASE: &str = "https://images.unsplash.com";

#[allow(clippy::too_many_arguments)]
fn car(
    id: &str,
    image: &str,
    brand: &str,
    model: &str,
    body_type: BodyType,
    seats: u32,
    transmission: Transmission,
    price: u64,
    price_basis: PriceBasis,
    fuel_type: FuelType,
    year: u32,
    odometer: u64,
    negotiable: bool,
) -> Listing {
    Listing {
        id: id.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        body_type,
        seats,
        transmission,
        price,
        price_basis,
        fuel_type,
        odometer: Some(odometer),
        year: Some(year),
        negotiable,
        image: Some(format!("{}/{}?q=80&w=600&auto=format&fit=crop", IMAGE_BASE, image)),
    }
}

use crate::models::BodyType::*;
use crate::models::FuelType::*;
use crate::models::PriceBasis::*;
use crate::models::Transmission::*;

pub static SALE_LISTINGS: Lazy<Vec<Listing>> = Lazy::new(|| {
    vec![
        car("1", "photo-1580273916550-e323be2ae537", "Porsche", "718 Cayman S", Coupe, 2, Manual, 8_500_000, OneTime, Petrol, 2022, 15_000, true),
        car("2", "photo-1609521263047-f8f205293f24", "Audi", "Q8", Suv, 5, Automatic, 9_900_000, OneTime, Diesel, 2023, 8_000, false),
        car("3", "photo-1570356328025-32968a120b83", "Tesla", "Model 3", Sedan, 5, Automatic, 6_000_000, OneTime, Electric, 2023, 5_000, false),
        car("4", "photo-1612825173281-9a193378527e", "Mercedes", "GLC 43", Suv, 5, Automatic, 7_500_000, OneTime, Hybrid, 2022, 12_000, false),
        car("5", "photo-1552519507-da3b142c6e3d", "Lamborghini", "Huracan", Coupe, 2, Automatic, 35_000_000, OneTime, Petrol, 2022, 3_000, true),
        car("6", "photo-1502877338535-766e1452684a", "Ferrari", "F8 Tributo", Coupe, 2, Automatic, 42_000_000, OneTime, Petrol, 2021, 5_000, false),
        car("7", "photo-1603584173870-7f23fdae1b7a", "Volvo", "XC60", Suv, 5, Automatic, 6_500_000, OneTime, Diesel, 2022, 10_000, false),
        car("8", "photo-1618843479313-40f8afb4b4d8", "BMW", "i4", Sedan, 5, Automatic, 7_200_000, OneTime, Electric, 2023, 2_000, false),
        car("9", "photo-1617469767053-8ff5763ce1a9", "Land Rover", "Range Rover Sport", Suv, 5, Automatic, 12_000_000, OneTime, Petrol, 2022, 12_000, true),
    ]
});

pub static RENTAL_LISTINGS: Lazy<Vec<Listing>> = Lazy::new(|| {
    vec![
        car("r1", "photo-1549317661-bd32c8ce0db2", "Hyundai", "Creta", Suv, 5, Manual, 3_000, PerDay, Petrol, 2022, 25_000, false),
        car("r2", "photo-1541899481282-d53bffe3c35d", "BMW", "X1", Suv, 5, Automatic, 8_000, PerDay, Diesel, 2023, 15_000, false),
        car("r3", "photo-1607853202273-797f1c22a38e", "Jeep", "Compass", Suv, 5, Automatic, 5_000, PerDay, Diesel, 2022, 30_000, false),
        car("r4", "photo-1533473359331-0135ef1b58bf", "Audi", "A4", Sedan, 5, Automatic, 7_000, PerDay, Petrol, 2021, 40_000, false),
        car("r5", "photo-1594502176235-d579398bc2d7", "Tesla", "Model Y", Suv, 5, Automatic, 9_000, PerDay, Electric, 2023, 10_000, false),
        car("r6", "photo-1617654112368-307dae8977b1", "Mercedes", "C-Class", Sedan, 5, Automatic, 8_500, PerDay, Petrol, 2022, 25_000, false),
        car("r7", "photo-1570356528233-b442cf2de345", "BMW", "i3", Hatchback, 4, Automatic, 6_500, PerDay, Electric, 2022, 15_000, false),
        car("r8", "photo-1616789916437-bbf724d10dab", "Volvo", "XC40", Suv, 5, Automatic, 7_500, PerDay, Hybrid, 2023, 18_000, false),
    ]
});
