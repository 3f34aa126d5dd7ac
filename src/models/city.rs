use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i32,
    pub city_name: String,
    pub time_zone: String, // IANA or Windows id
}

/// Read-only view over the reference city list.
pub trait CityLookup {
    fn city(&self, id: i32) -> Option<&City>;
    fn is_empty(&self) -> bool;
}

#[derive(Debug, Default, Clone)]
pub struct CityDirectory {
    cities: HashMap<i32, City>,
}

impl CityDirectory {
    pub fn new(cities: impl IntoIterator<Item = City>) -> Self {
        Self {
            cities: cities.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl CityLookup for CityDirectory {
    fn city(&self, id: i32) -> Option<&City> {
        self.cities.get(&id)
    }

    fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl FromIterator<City> for CityDirectory {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        Self::new(iter)
    }
}
