use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use ergode_graph::{read_graph, validate};
use ergode_hasse::{class_of, classify, condense, reduce_transitive};
use ergode_matrix::{Matrix, power, power_iterate, propagate};
use ergode_period::{PeriodError, class_period};
use ergode_tarjan::decompose;

use crate::cli::AnalyzeArgs;
use crate::config;
use crate::report;

/// Run the full analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let cfg = config::load(args.config.as_deref())?;

    // Step 1: read the input graph.
    info!(path = %args.input.display(), "reading graph");
    let graph = read_graph(&args.input)
        .with_context(|| format!("cannot load graph {}", args.input.display()))?;
    info!(
        n_states = graph.n_states(),
        n_transitions = graph.n_transitions(),
        "graph loaded"
    );

    // Step 2: stochasticity check (diagnostic only, never aborts).
    println!("Markov chain check:");
    let validation = validate(&graph);
    print!("{}", report::format_validation(&validation));
    println!();

    // Step 3: SCC decomposition.
    let partition = decompose(&graph);
    print!("{}", report::format_partition(&partition));
    println!();

    // Step 4: condensation, optionally transitively reduced.
    let corresp = class_of(&partition, graph.n_states());
    let mut edges = condense(&graph, &corresp);
    print!("{}", report::format_links(&edges));
    let reduce = cfg.analysis.transitive_reduction && !args.keep_redundant;
    if reduce {
        reduce_transitive(&mut edges);
        println!("After transitive reduction:");
        print!("{}", report::format_links(&edges));
    }
    println!();

    // Step 5: classification.
    let kinds = classify(&graph, &partition);
    print!("{}", report::format_classification(&partition, &kinds));
    println!();

    // Step 6: transition matrix and its small powers.
    let m = Matrix::from_graph(&graph);
    println!("Matrix M:");
    print!("{}", report::format_matrix(&m));
    for n in [2usize, 3] {
        let mn = power(&m, n)?;
        println!("Matrix M^{n}:");
        print!("{}", report::format_matrix(&mn));
    }
    println!();

    // Step 7: power iteration to convergence.
    let convergence = power_iterate(&m, cfg.analysis.epsilon, cfg.analysis.max_iterations)?;
    print!(
        "{}",
        report::format_convergence(&convergence, cfg.analysis.epsilon)
    );
    if convergence.converged {
        println!("Stationary matrix:");
        print!("{}", report::format_matrix(&convergence.matrix));
    }
    println!();

    // Step 8: per-class submatrices and periodicity. A per-class failure is
    // reported and skipped, never fatal for the other classes.
    for (_, class) in partition.iter() {
        println!("--- Class {} {:?} ---", class.name(), class.members());

        let columns = m.column_submatrix(class)?;
        println!("Column submatrix of M:");
        print!("{}", report::format_matrix(&columns));

        if convergence.converged {
            let stationary_columns = convergence.matrix.column_submatrix(class)?;
            println!("Column submatrix of the stationary matrix:");
            print!("{}", report::format_matrix(&stationary_columns));
        }

        let square = m.square_submatrix(class)?;
        match class_period(&square) {
            Ok(1) => println!("Period 1: aperiodic"),
            Ok(p) => println!("Period {p}: periodic"),
            Err(PeriodError::NoReturnTimes { n_powers }) => {
                warn!(class = class.name(), n_powers, "period undefined");
                println!("Period undefined: no return time within {n_powers} powers");
            }
            Err(e) => return Err(e).context(format!("period analysis for {}", class.name())),
        }
    }
    println!();

    // Step 9: optional initial distribution propagation.
    let dist = match args.dist {
        Some(d) => Some(d),
        None => cfg.distribution.resolve()?,
    };
    if let Some(dist) = dist {
        let seed = args.seed.or(cfg.seed);
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let steps = args.steps.or(cfg.distribution.steps).unwrap_or(1);

        let initial = dist.build(graph.n_states(), &mut rng)?;
        println!("Initial distribution:");
        print!("{}", report::format_matrix(&initial));

        let after = propagate(&initial, &m, steps)?;
        println!("Distribution after {steps} steps:");
        print!("{}", report::format_matrix(&after));
        info!(steps, "distribution propagated");
    }

    Ok(())
}
