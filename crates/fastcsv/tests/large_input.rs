use fastcsv::Options;
use rand::RngExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_csv(rows: usize, rng: &mut StdRng) -> String {
    let mut s = String::from("id,name,city\n");
    for i in 0..rows {
        let n: u32 = rng.random_range(0..1_000_000);
        s.push_str(&format!("{i},user{n},\"City {n}, ZZ\"\n"));
    }
    s
}

#[test]
fn ten_thousand_rows_parse_completely() {
    let mut rng = StdRng::seed_from_u64(42);
    let input = make_csv(10_000, &mut rng);
    let mut parser = fastcsv::CsvParser::new(Options::default()).unwrap();
    let rows = parser.parse(&input).unwrap();
    assert_eq!(rows.len(), 10_000);
    assert_eq!(parser.headers(), ["id", "name", "city"]);
    assert!(rows.iter().all(|r| r.len() == 3));
    assert_eq!(rows[9_999][0], "9999");
}

#[test]
fn ten_thousand_rows_map_to_records() {
    let mut rng = StdRng::seed_from_u64(7);
    let input = make_csv(10_000, &mut rng);
    let out = fastcsv::parse_to_records(&input, &Options::default()).unwrap();
    assert_eq!(out.len(), 10_000);
    assert_eq!(out.ragged_rows, 0);
    assert!(out.iter().all(|r| r["city"].contains(", ZZ")));
}
