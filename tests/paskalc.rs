use std::error::Error;
use std::path::Path;

#[test]
fn accepts_a_minimal_program() -> Result<(), Box<dyn Error>> {
    let stdout = test_utils::check_analysis_succeeds(Path::new("./fixtures/hello.pas"))?;
    assert!(stdout.contains("semantic analysis passed"));
    Ok(())
}

#[test]
fn accepts_array_declarations_and_indexing() -> Result<(), Box<dyn Error>> {
    test_utils::check_analysis_succeeds(Path::new("./fixtures/arrays.pas"))?;
    Ok(())
}

#[test]
fn dump_flags_print_cst_ast_and_tables() -> Result<(), Box<dyn Error>> {
    let stdout = test_utils::check_analysis_succeeds_with(
        Path::new("./fixtures/hello.pas"),
        &["--dump-cst", "--dump-ast", "--dump-tables"],
    )?;
    assert!(stdout.contains("Program"));
    assert!(stdout.contains("IDT (identifier table)"));
    assert!(stdout.contains("BLT (block table)"));
    Ok(())
}

#[test]
fn reads_pretokenized_fixtures() -> Result<(), Box<dyn Error>> {
    test_utils::check_analysis_succeeds(Path::new("./fixtures/minimal.txt"))?;
    Ok(())
}

#[test]
fn rejects_a_real_assigned_to_an_integer() -> Result<(), Box<dyn Error>> {
    let stderr = test_utils::check_analysis_fails(Path::new("./fixtures/type_mismatch.pas"))?;
    assert!(stderr.contains("semantic error"));
    Ok(())
}

#[test]
fn reports_the_deepest_syntax_error() -> Result<(), Box<dyn Error>> {
    let stderr = test_utils::check_analysis_fails(Path::new("./fixtures/syntax_error.pas"))?;
    assert!(stderr.contains("Error Location (Index):"));
    assert!(stderr.contains("Rule"));
    Ok(())
}
