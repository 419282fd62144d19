fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile backend contract protos
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "proto/user.proto",
                "proto/post.proto",
                "proto/connection.proto",
                "proto/job.proto",
                "proto/message.proto",
            ],
            &["proto"],
        )?;

    // Re-run if proto files change
    println!("cargo:rerun-if-changed=proto");

    Ok(())
}
