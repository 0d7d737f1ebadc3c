pub mod salary_record;
