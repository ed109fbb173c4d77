use libtest_mimic::Arguments;
use libtest_mimic::Trial;
use selectel_fs::error::Result;

mod operations;

pub use utils::*;

fn main() -> Result<()> {
    let args = Arguments::from_args();

    let adapter = TEST_RUNTIME.block_on(init_test_service())?;

    let mut tests = Vec::new();

    operations::read_write::tests(&adapter, &mut tests);
    operations::list::tests(&adapter, &mut tests);
    operations::metadata::tests(&adapter, &mut tests);
    operations::copy::tests(&adapter, &mut tests);
    operations::mv::tests(&adapter, &mut tests);
    operations::delete::tests(&adapter, &mut tests);
    operations::cli::tests(&adapter, &mut tests);

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let conclusion = libtest_mimic::run(&args, tests);

    TEST_RUNTIME.block_on(TEST_FIXTURE.cleanup(adapter.container().operator()));

    conclusion.exit()
}
