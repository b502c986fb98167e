
use clap::Parser;
use fraction_bench::{bench::{BenchConfig, DEFAULT_NUM}, util::now_millis};


#[derive(Parser, Debug, Clone)]
#[clap(name = "fbench", author, about = "fraction queue/map bench", long_about = None)]
pub struct Args {
    #[clap(short = 'n', long = "num", long_help = "fractions per phase", default_value_t = DEFAULT_NUM)]
    pub num: usize,

    #[clap(short = 's', long = "seed", long_help = "random seed; default current time in milliseconds")]
    seed: Option<u64>,

    #[clap(long = "json", long_help = "also print the bench report as one json line")]
    pub json: bool,

    #[clap(long = "demo", long_help = "show fraction arithmetic before benching")]
    pub demo: bool,
}

impl Args {
    pub fn bench_config(&self) -> BenchConfig {
        let seed = self.seed.unwrap_or_else(|| now_millis() as u64);
        BenchConfig::new(self.num, seed)
    }
}
