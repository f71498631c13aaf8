use std::process::Command;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fall back to a downloaded protoc when none is installed
    let mut includes = vec!["proto".to_string()];
    let have_protoc = std::env::var_os("PROTOC").is_some()
        || Command::new("protoc")
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false);
    if !have_protoc {
        let (protoc_bin, include_dir) = protoc_prebuilt::init("27.0")
            .map_err(|e| format!("failed to fetch protoc: {e:?}"))?;
        std::env::set_var("PROTOC", protoc_bin);
        includes.push(include_dir.display().to_string());
    }

    // Compile protobuf files into Rust code
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir("src/grpc") // Output directory for generated code
        .compile_protos(&["proto/bookstore.proto"], &includes)?;

    // Tell Cargo to re-run this build script if the proto file changes
    println!("cargo:rerun-if-changed=proto/bookstore.proto");

    Ok(())
}
