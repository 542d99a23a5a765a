fn main() {
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .out_dir(&out_dir)
        .compile_protos(&["../proto/greeting/v1/greeting.proto"], &["../proto"])
        .expect("Failed to compile greeting.proto");

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .out_dir(&out_dir)
        .compile_protos(&["../proto/product/v1/product.proto"], &["../proto"])
        .expect("Failed to compile product.proto");

    println!("cargo:rerun-if-changed=../proto/greeting/v1/greeting.proto");
    println!("cargo:rerun-if-changed=../proto/product/v1/product.proto");
}
