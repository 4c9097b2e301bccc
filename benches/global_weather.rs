use criterion::{black_box, criterion_group, criterion_main, Criterion};
use global_weather::{temperature_slope, MalformedRow, WeatherDataset};

const CITIES: [(&str, &str, &str); 4] = [
    ("Canada", "", "Calgary"),
    ("US", "Maine", "Caribou"),
    ("US", "Maine", "Portland"),
    ("US", "Texas", "Austin"),
];

fn synthetic_csv() -> String {
    let mut csv = String::from("Region,Country,State,City,Month,Day,Year,AvgTemperature\n");
    for (country, state, city) in CITIES {
        for year in 1995..2020 {
            for month in 1..=12 {
                for day in 1..=28 {
                    let temperature = if day == 13 {
                        -99.0
                    } else {
                        f64::from(month) * 3.0 - 5.0
                    };
                    csv.push_str(&format!(
                        "North America,{country},{state},{city},{month},{day},{year},{temperature:.1}\n"
                    ));
                }
            }
        }
    }
    csv
}

fn bench_dataset(c: &mut Criterion) {
    let csv = synthetic_csv();
    let mut rejected: Vec<MalformedRow> = Vec::new();
    let dataset = WeatherDataset::from_reader(csv.as_bytes(), &mut rejected)
        .expect("in-memory source cannot fail");

    c.bench_function("from_reader", |b| {
        b.iter(|| {
            let mut rejected: Vec<MalformedRow> = Vec::new();
            WeatherDataset::from_reader(black_box(csv.as_bytes()), &mut rejected)
        })
    });
    c.bench_function("readings_on", |b| {
        b.iter(|| dataset.readings_on(0, dataset.len(), black_box(1), black_box(2)))
    });
    c.bench_function("city_stats", |b| {
        b.iter(|| {
            dataset
                .city_stats()
                .country(black_box("US"))
                .state("Maine")
                .city("Portland")
                .call()
        })
    });
    c.bench_function("temperature_slope", |b| {
        b.iter(|| temperature_slope(black_box(dataset.as_slice())))
    });
}

criterion_group!(benches, bench_dataset);
criterion_main!(benches);
