use anyhow::{Context, Result};
use log::{info, LevelFilter};
use redeem_matrix::{Matrix, NormKind};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("REDEEM_LOG", "error,redeem_matrix=debug"))
        .init();

    let a = Matrix::from_values(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0])
        .context("failed to build matrix A")?;
    println!("A =");
    a.print();
    println!("det(A) = {}", a.determinant());

    let b = Matrix::from_rows(&[
        [1.0, 0.0, 2.0, -1.0],
        [3.0, 0.0, 0.0, 5.0],
        [2.0, 1.0, 4.0, -3.0],
        [1.0, 0.0, 5.0, 0.0],
    ])
    .context("failed to build matrix B")?;
    info!("B is {}x{}", b.nrows(), b.ncols());
    println!("det(B) = {} (singular: {})", b.determinant(), b.is_singular());

    let at = a.transpose();
    let product = a.mul(&at).context("A * A^T")?;
    println!("A * A^T =");
    product.print();

    let norm: NormKind = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("1")
        .parse()
        .map_err(anyhow::Error::msg)?;
    println!("{:?} norm of A = {}", norm, a.norm(norm));

    let row = a.row(3).err().map(|e| e.to_string()).unwrap_or_default();
    println!("row(3) on a 3x3 matrix: {}", row);

    Ok(())
}
