use clap::{Parser, command};

// Some defaults; some of which can be overriden via CLI args
const CONFIG_FILE_PATH: &str = "./gestures.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load classifier config
    #[arg(long="configPath",default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Recorded landmark frames to replay: JSON, or MessagePack when the
    /// extension is .msgpack/.mp
    #[arg(long = "framesPath")]
    pub frames_path: String,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}
