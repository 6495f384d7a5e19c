use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let proto_dir = PathBuf::from("proto");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=proto/");

    // Compile the proto files from the local proto/ directory
    let result = tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .file_descriptor_set_path(out_dir.join("gatekeeper_descriptor.bin"))
        .compile_protos(
            &[proto_dir.join("gatekeeper/v1/gatekeeper.proto")],
            &[&proto_dir],
        );

    // Fall back to the vendored pre-generated code when protoc is unavailable
    // so the crate still builds in offline environments.
    if result.is_err() {
        std::fs::copy(
            proto_dir.join("vendored/gatekeeper.v1.rs"),
            out_dir.join("gatekeeper.v1.rs"),
        )?;
    }

    Ok(())
}
