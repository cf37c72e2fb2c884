//! ログ初期化
//!
//! `RUST_LOG` があればそれを優先し、なければ `-v` で debug、通常は warn。

use env_logger::Env;

pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    // テスト等で二重に初期化されても失敗扱いにしない
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
