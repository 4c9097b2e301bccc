pub mod city_stats;
pub mod reading;
