use ark_bls12_381::Fr;
use ark_ff::UniformRand;
use ark_poly::univariate::DensePolynomial;
use ark_poly::DenseUVPolynomial;
use batch::prover::prove_batch;
use batch::verifier::verify_batch;
use kzg::scheme::KzgScheme;
use kzg::srs::Srs;

const POLYNOMIALS_NUM: usize = 3;
const POLYNOMIAL_LEN: usize = 64;

fn main() {
    let mut rng = rand::thread_rng();

    // trusted setup
    let srs = Srs::new(POLYNOMIAL_LEN);
    let scheme = KzgScheme::new(&srs);

    // commit to each polynomial independently
    let polynomials: Vec<Vec<Fr>> = (0..POLYNOMIALS_NUM)
        .map(|_| (0..POLYNOMIAL_LEN).map(|_| Fr::rand(&mut rng)).collect())
        .collect();
    let commitments = polynomials
        .iter()
        .map(|coefficients| {
            scheme
                .commit(&DensePolynomial::from_coefficients_slice(coefficients))
                .expect("srs sized for the demo polynomials")
        })
        .collect::<Vec<_>>();

    let seed = Fr::rand(&mut rng);
    let open_point = Fr::rand(&mut rng);

    // one proof covers the whole batch
    let proof = prove_batch(&polynomials, open_point, seed, &srs).expect("non-empty batch");
    verify_batch(&commitments, &proof, open_point, seed, &srs).expect("honest proof verifies");

    println!(
        "one opening proof verified against {} folded commitments",
        commitments.len()
    );
}
