//! Extraction throughput on captured pages

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kleinanzeigen_scraper::infrastructure::parsing::{
    DocumentParser, HtmlDocument, ListingPageParser, RecordParser, field_parsers,
};

const LISTING_PAGE: &str = include_str!("../tests/fixtures/listing_page.html");
const RECORD_PAGE: &str = include_str!("../tests/fixtures/record_page.html");

fn bench_listing_page(c: &mut Criterion) {
    let parser = ListingPageParser::new().unwrap();
    let document = HtmlDocument::parse_str(LISTING_PAGE);

    c.bench_function("listing_page_parse_and_extract", |b| {
        b.iter(|| parser.parse_bytes(black_box(LISTING_PAGE.as_bytes())).unwrap());
    });
    c.bench_function("listing_page_extract_only", |b| {
        b.iter(|| parser.parse_document(black_box(&document)).unwrap());
    });
}

fn bench_record_page(c: &mut Criterion) {
    let parser = RecordParser::new().unwrap();

    c.bench_function("record_page_parse_and_extract", |b| {
        b.iter(|| parser.parse_bytes(black_box(RECORD_PAGE.as_bytes())).unwrap());
    });
}

fn bench_field_parsers(c: &mut Criterion) {
    c.bench_function("parse_price", |b| {
        b.iter(|| field_parsers::parse_price(black_box("14.500 € VB")));
    });
    c.bench_function("parse_listing_age", |b| {
        b.iter(|| field_parsers::parse_listing_age(black_box("22.03.2021\n Anzeigennr.: 1708911891")));
    });
}

criterion_group!(benches, bench_listing_page, bench_record_page, bench_field_parsers);
criterion_main!(benches);
