use nqueens::{SearchParams, Strategy};

const N: usize = 8;
// pure chance rarely gets past six queens in reasonable time
const RANDOM_N: usize = 6;

fn main() {
    let params = SearchParams::default();
    for &strategy in Strategy::ALL {
        let n = match strategy {
            Strategy::CompletelyRandom => RANDOM_N,
            _ => N,
        };
        match strategy.search(n, &params) {
            Ok(report) => println!("{}", report),
            Err(err) => eprintln!("{}: {}", strategy, err),
        }
    }
}
