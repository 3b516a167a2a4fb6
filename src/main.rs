use std::env;
use std::process;

use log::error;
use prim_steps::{ConsoleSink, PrimRunner, RandomGraphGenerator, RandomGraphParams};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut builder = RandomGraphParams::builder();
    if let Some(arg) = env::args().nth(1) {
        match arg.parse::<u64>() {
            Ok(seed) => builder = builder.seed(seed),
            Err(_) => {
                error!("Seed must be a non-negative integer, got {arg:?}");
                process::exit(2);
            }
        }
    }

    let mut generator = RandomGraphGenerator::new(builder.build());
    let graph = generator.generate();
    println!("Graph with {} vertices:", graph.vertex_count());
    for (id, edge) in graph.edges() {
        println!("  {id}: {} - {} ({})", edge.source(), edge.target(), edge.weight());
    }

    let Some(start) = generator.random_vertex(&graph) else {
        error!("Generated graph has no vertices");
        process::exit(1);
    };
    println!("Starting at {start}");

    let mut runner = PrimRunner::new(&graph, ConsoleSink::new());
    match runner.run(start) {
        Ok(tree) => println!(
            "Spanning tree of {} vertices, total weight {:.1}",
            tree.vertex_count(),
            tree.total_weight
        ),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}
