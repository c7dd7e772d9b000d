use clap::ValueEnum;
use rand::{rngs::StdRng, SeedableRng};
use sortlab_bench::complexity::{analyse, Shape};
use sortlab_bench::patterns::{generate, input_sizes, Order};
use sortlab_bench::report::load_csv;
use sortlab_bench::timer::{time_sort, Sweep};
use sortlab_orst::orst::is_sorted;
use sortlab_orst::SortAlgorithm;

#[test]
fn generated_inputs_sort_with_every_algorithm() {
    let mut rng = StdRng::seed_from_u64(42);

    for order in Order::value_variants() {
        for &algorithm in SortAlgorithm::value_variants() {
            let mut values = generate(*order, 300, &mut rng).unwrap();
            algorithm.sort(&mut values, 300).unwrap();

            let sorted = is_sorted(&values, 300).unwrap();
            match (algorithm, order) {
                (SortAlgorithm::NoSort, Order::Random) => {}
                (SortAlgorithm::NoSort, Order::Reverse) => assert!(!sorted),
                _ => assert!(sorted, "{} on {order}", algorithm.name()),
            }
        }
    }
}

#[test]
fn no_sort_on_unsorted_input_is_not_an_error() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(time_sort(SortAlgorithm::NoSort, Order::Reverse, 100, &mut rng).is_ok());
}

#[test]
fn sweep_then_fit() {
    let dir = tempfile::tempdir().unwrap();
    let sweep = Sweep {
        sizes: input_sizes(2.0, 20).unwrap(),
        interval: 20,
        repeats: 2,
        results_dir: dir.path().to_path_buf(),
    };

    let path = sweep
        .run_with_fixed_algorithm(
            SortAlgorithm::Heap,
            Order::value_variants(),
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();

    let table = load_csv(&path).unwrap();
    assert_eq!(table.header, ["Input Size", "Reverse", "Random", "Pre-sorted"]);
    assert_eq!(table.column(0), [0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

    // Timings are noisy, only check that every column can be fitted.
    for column in 1..table.header.len() {
        let fit = analyse(&table.column(0), &table.column(column)).unwrap();
        assert!(Shape::ALL.contains(&fit.shape));
        assert!(fit.upper_bound >= 0.0);
    }
}
