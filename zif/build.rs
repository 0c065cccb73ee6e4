use std::fs;

use protobuf_codegen::{Codegen, Customize};

const PROTO_DIRECTORY: &str = "../protobuf";
const OUTPUT_DIRECTORY: &str = "src/ipc/proto";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", PROTO_DIRECTORY);

    fs::create_dir_all(OUTPUT_DIRECTORY).expect("expected the proto output directory to be created");
    Codegen::new()
        .pure()
        .out_dir(OUTPUT_DIRECTORY)
        .includes([PROTO_DIRECTORY])
        .inputs([
            "../protobuf/application.proto",
            "../protobuf/message.proto",
            "../protobuf/stream.proto",
        ])
        .customize(Customize::default().lite_runtime(true).gen_mod_rs(true))
        .run()
        .expect("expected the protobuf sources to be generated");
}
