use std::io::{self, BufWriter, Read, Write};

use dreidel_rs::Dreidel;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(args.first().map(|s| s.as_str()), Some("-h" | "--help")) {
        eprintln!(
            "Usage: dreidel_rs [seed spins]...\n\
             \n\
             Pass seed/spin-count pairs directly, or provide them via stdin\n\
             (whitespace-separated). Each pair seeds a fresh dreidel and prints\n\
             one face per line. Processing stops at EOF or when a seed of 0 is\n\
             read."
        );
        return;
    }

    let input: String;
    let mut tokens: Box<dyn Iterator<Item = &str>>;

    if args.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).unwrap();
        input = buf;
        tokens = Box::new(input.split_whitespace());
    } else {
        input = args.join(" ");
        tokens = Box::new(input.split_whitespace());
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    while let Some(seed) = tokens.next().and_then(|s| s.parse::<u32>().ok()) {
        if seed == 0 {
            break;
        }

        let spins: u64 = match tokens.next().and_then(|s| s.parse().ok()) {
            Some(v) => v,
            None => {
                eprintln!("Error: missing spin count");
                std::process::exit(1);
            }
        };

        let mut dreidel = match Dreidel::new(seed) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        for _ in 0..spins {
            writeln!(out, "{}", dreidel.spin()).expect("writing face output");
        }
    }
}
