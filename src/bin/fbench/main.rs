
use anyhow::{Result, Context};
use args::Args;
use clap::Parser;
use fraction_bench::{bench, util::log, Fraction, OpCounter};
use tracing::{info, error};

mod args;



fn main() -> Result<()> {
    let args = Args::parse();
    log::init()?;

    info!("num_cpus {}", num_cpus::get());

    let r = run_me(&args);
    match r {
        Ok(_r) => Ok(()),
        Err(e) => {
            error!("{:?}", e);
            Ok(())
        },
    }
}

fn run_me(args: &Args) -> Result<()> {
    if args.demo {
        demo(OpCounter::global());
    }

    let report = bench::run(&args.bench_config())?;

    if args.json {
        let s = serde_json::to_string(&report).with_context(||"encode report")?;
        println!("{}", s);
    }

    info!("operations: {}", OpCounter::global().human());
    Ok(())
}

fn demo(ops: &OpCounter) {
    let a = Fraction::new(1, 2);
    let b = Fraction::new(2, 3);
    a.display();
    b.display();

    a.add(&b, ops).display();
    a.subtract(&b, ops).display();
    a.multiply(&b, ops).display();
    a.divide(&b, ops).display();
    println!("{} < {}: {}", a, b, a.less_than(&b));

    Fraction::default().display();
    Fraction::display_operation_count(ops);
}
