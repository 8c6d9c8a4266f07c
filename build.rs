fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_file = "proto/item/v1/item.proto";

    println!("cargo:rerun-if-changed={proto_file}");
    println!("cargo:rerun-if-changed=proto");

    tonic_prost_build::configure()
        .build_client(true)
        .build_server(true)
        .compile_protos(&[proto_file], &["proto"])?;

    Ok(())
}
