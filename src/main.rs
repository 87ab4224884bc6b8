use html::battery::{CASES, Stage, run_case};
use mimalloc::MiMalloc;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let mut failed = 0usize;
    for stage in Stage::ALL {
        println!("{}", stage.title());
        println!();
        for case in CASES.iter().filter(|case| case.stage == stage) {
            let outcome = run_case(case);
            if outcome.passed() {
                println!("{outcome}");
            } else {
                failed += 1;
                eprintln!("{outcome}");
            }
        }
        println!("---------------");
        println!();
    }
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        eprintln!("{failed} of {} cases failed", CASES.len());
        ExitCode::FAILURE
    }
}
