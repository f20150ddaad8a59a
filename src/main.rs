use sortnet::render::render_program;
use sortnet::verify::self_test;
use sortnet::{ElementType, Family, KernelConfig, LanePolicy, ProgramCache};

fn print_usage() {
    println!("Usage: sortnet <family> <n> [type]");
    println!();
    println!("Families:");
    for family in Family::ALL {
        println!("  {}", family);
    }
    println!();
    println!("Types: u8 u16 u32 u64 i8 i16 i32 i64 f32 f64 (default u32)");
    println!();
    println!("Environment:");
    println!("  SORTNET_ISA           scalar | sse | avx2 | avx512");
    println!("  SORTNET_EXTRA_MEMORY  enable full-register loads");
    println!("  RUST_LOG              log filter, e.g. sortnet=debug");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        print_usage();
        std::process::exit(2);
    }

    let family: Family = match args[1].parse() {
        Ok(family) => family,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };
    let n: usize = match args[2].parse() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: invalid size '{}': {}", args[2], e);
            std::process::exit(2);
        }
    };
    let element = args.get(3).map(|s| s.parse()).unwrap_or(Ok(ElementType::U32));
    let element: ElementType = match element {
        Ok(element) => element,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    let config = KernelConfig::default().with_element(element);
    let result = config.lane_count(n).and_then(|lanes| {
        let cache = ProgramCache::new();
        let program = cache.get_or_build(family, n, LanePolicy::Fixed(lanes))?;
        self_test(&program)?;
        Ok(program)
    });

    match result {
        Ok(program) => print!("{}", render_program(&program, &config)),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
